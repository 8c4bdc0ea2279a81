//! Service and teaching history.

use leptos::prelude::*;

use crate::components::glass_card::{GlassCard, SectionHeading};
use crate::content::SERVICE_TEACHING;

#[component]
pub fn ServiceList() -> impl IntoView {
    view! {
        <section id="service" class="section">
            <SectionHeading icon="🎓" title="Service & Teaching"/>
            <GlassCard>
                <ul class="service-list">
                    {SERVICE_TEACHING
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="service-list__item">
                                    <span class="service-list__chevron" aria-hidden="true">"›"</span>
                                    <p>{*item}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </GlassCard>
        </section>
    }
}
