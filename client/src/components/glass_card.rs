//! Frosted card chrome shared by publication and service sections.

#[cfg(test)]
#[path = "glass_card_test.rs"]
mod glass_card_test;

use leptos::prelude::*;

const BASE_CLASS: &str = "glass-card";
const HOVER_CLASS: &str = "glass-card--hover";

/// Class list for a glass card, optionally lifting on hover, plus `extra`.
pub fn glass_card_class(hover_effect: bool, extra: &str) -> String {
    let mut class = String::from(BASE_CLASS);
    if hover_effect {
        class.push(' ');
        class.push_str(HOVER_CLASS);
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Static glass card container.
#[component]
pub fn GlassCard(
    children: Children,
    #[prop(optional)] hover_effect: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <div class=glass_card_class(hover_effect, &class)>{children()}</div> }
}

/// Section title with a leading icon badge.
#[component]
pub fn SectionHeading(icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <div class="section-heading__icon" aria-hidden="true">{icon}</div>
            <h2 class="section-heading__title">{title}</h2>
        </div>
    }
}
