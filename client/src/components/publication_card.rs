//! Publication list with click-to-expand abstracts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Expansion state lives in the shared `RwSignal<DisclosureSet>`; each card
//! flips only its own id. Cards without an abstract are inert, and clicks on
//! the PDF/Code links never reach the card.

#[cfg(test)]
#[path = "publication_card_test.rs"]
mod publication_card_test;

use leptos::prelude::*;

use crate::components::glass_card::{SectionHeading, glass_card_class};
use crate::content::{HIGHLIGHT_NAME, PUBLICATIONS, Publication};
use crate::state::disclosure::DisclosureSet;
use crate::util::authors::split_authors;

pub fn publication_card_class(expandable: bool) -> String {
    let extra = if expandable { "publication-card publication-card--expandable" } else { "publication-card" };
    glass_card_class(true, extra)
}

pub fn abstract_panel_class(open: bool) -> &'static str {
    if open { "abstract-panel abstract-panel--open" } else { "abstract-panel" }
}

pub fn abstract_body_class(open: bool) -> &'static str {
    if open { "abstract-panel__body abstract-panel__body--open" } else { "abstract-panel__body" }
}

fn author_class(highlighted: bool) -> &'static str {
    if highlighted { "author author--highlight" } else { "author" }
}

#[component]
pub fn PublicationList() -> impl IntoView {
    view! {
        <section id="publications" class="section">
            <SectionHeading icon="📖" title="Selected Publications"/>
            <div class="publication-list">
                {PUBLICATIONS
                    .iter()
                    .map(|publication| view! { <PublicationCard publication=publication/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn PublicationCard(publication: &'static Publication) -> impl IntoView {
    let disclosures = expect_context::<RwSignal<DisclosureSet>>();
    let id = publication.id;
    let expandable = publication.has_abstract();
    let is_open = move || disclosures.with(|set| set.is_open(id));

    let on_card_click = move |_: leptos::ev::MouseEvent| {
        if expandable {
            disclosures.update(|set| {
                set.toggle(id);
            });
        }
    };

    let authors = split_authors(publication.authors, HIGHLIGHT_NAME)
        .into_iter()
        .map(|entry| {
            view! {
                <span class=author_class(entry.highlighted)>{entry.name}</span>
                {entry.separated.then_some(", ")}
            }
        })
        .collect_view();

    let tags = publication
        .tags
        .iter()
        .map(|tag| view! { <span class="publication-card__tag">{*tag}</span> })
        .collect_view();

    let abstract_panel = expandable.then(|| {
        view! {
            <div class=move || abstract_panel_class(is_open())>
                <div class="abstract-panel__clip">
                    <div class=move || abstract_body_class(is_open())>
                        {publication
                            .abstract_paragraphs
                            .iter()
                            .map(|paragraph| view! { <p class="abstract-panel__paragraph">{*paragraph}</p> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        }
    });

    view! {
        <article
            class=publication_card_class(expandable)
            on:click=on_card_click
            aria-expanded=move || expandable.then(|| is_open().to_string())
        >
            <div class="publication-card__accent" aria-hidden="true"></div>
            <div class="publication-card__header">
                <div class="publication-card__body">
                    <h3 class="publication-card__title">{publication.title}</h3>
                    <p class="publication-card__authors">{authors}</p>
                    <div class="publication-card__meta">
                        <span class="publication-card__venue">{publication.venue}</span>
                        {tags}
                    </div>
                </div>
                <div
                    class="publication-card__links"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    {publication.links.pdf.map(|href| {
                        view! {
                            <a
                                class="publication-card__link publication-card__link--pdf"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "PDF"
                            </a>
                        }
                    })}
                    {publication.links.code.map(|href| {
                        view! {
                            <a
                                class="publication-card__link publication-card__link--code"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Code"
                            </a>
                        }
                    })}
                </div>
            </div>
            {abstract_panel}
        </article>
    }
}
