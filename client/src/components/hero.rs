//! About section: name, position, advisor, biography, and avatar.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Hero() -> impl IntoView {
    let about = format!("{} {}", PROFILE.bio, PROFILE.research_interests);

    view! {
        <section id="about" class="hero">
            <div class="hero__text">
                <div>
                    <h1 class="hero__name">{PROFILE.name}</h1>
                    <p class="hero__subtitle">{PROFILE.title}</p>
                    <p class="hero__subtitle">
                        "Advised by: "
                        <a
                            class="link"
                            href=PROFILE.advisor_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {PROFILE.advisor}
                        </a>
                    </p>
                    <p class="hero__location">{PROFILE.location}</p>
                </div>
                <p class="hero__bio">{about}</p>
            </div>

            <div class="hero__avatar">
                <div class="hero__avatar-glow" aria-hidden="true"></div>
                <div class="hero__avatar-frame">
                    <img class="hero__avatar-img" src=PROFILE.avatar_src alt="Profile"/>
                </div>
            </div>
        </section>
    }
}

/// Email button plus external profile links.
#[component]
pub fn ContactBar() -> impl IntoView {
    view! {
        <div class="contact-bar">
            <a class="btn contact-bar__email" href=PROFILE.mailto()>
                <span aria-hidden="true">"✉"</span>
                " Email"
            </a>
            <div class="contact-bar__links">
                <a
                    class="contact-bar__link"
                    href=PROFILE.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub"
                >
                    "GitHub"
                </a>
                <a
                    class="contact-bar__link"
                    href=PROFILE.chinese_homepage_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "中文主页"
                </a>
            </div>
        </div>
    }
}
