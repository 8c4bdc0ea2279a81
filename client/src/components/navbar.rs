//! Fixed top navigation with section links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toggle only raises an intent on `UiState`; the page that owns the
//! theme controller performs the transition and publishes the new snapshot,
//! which this component renders.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::content::{NAV_LINKS, PROFILE};
use crate::state::theme::{EffectiveTheme, ThemeMode, ThemeSnapshot};
use crate::state::ui::UiState;

/// Tooltip describing the toggle order.
pub const TOGGLE_TITLE: &str = "依次切换：跟随系统 → 浅色 → 深色";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Moon => "☾",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Sun => "theme-icon theme-icon--sun",
            Self::Moon => "theme-icon theme-icon--moon",
        }
    }
}

/// How the toggle button presents the current theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStatus {
    pub icon: ThemeIcon,
    /// Show the "follows system" badge next to the icon.
    pub follows_system: bool,
    pub label: String,
}

pub fn theme_status(snapshot: ThemeSnapshot) -> ThemeStatus {
    match snapshot.mode {
        ThemeMode::System => {
            let (icon, shade) = match snapshot.effective {
                EffectiveTheme::Dark => (ThemeIcon::Moon, "深色"),
                EffectiveTheme::Light => (ThemeIcon::Sun, "浅色"),
            };
            ThemeStatus { icon, follows_system: true, label: format!("跟随系统 · {shade}") }
        }
        ThemeMode::Light => ThemeStatus { icon: ThemeIcon::Sun, follows_system: false, label: "浅色模式".to_owned() },
        ThemeMode::Dark => ThemeStatus { icon: ThemeIcon::Moon, follows_system: false, label: "深色模式".to_owned() },
    }
}

/// Accessible label announcing the current mode.
pub fn toggle_aria_label(status: &ThemeStatus) -> String {
    format!("切换主题，当前模式：{}", status.label)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let status = Memo::new(move |_| theme_status(ui.get().theme));

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <span class="navbar__brand">
                    {PROFILE.brand}
                    <span class="navbar__brand-dot">"."</span>
                </span>

                <div class="navbar__actions">
                    <div class="navbar__links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <a class="navbar__link" href=link.href>{link.label}</a> })
                            .collect_view()}
                    </div>

                    <button
                        class="btn navbar__theme-toggle"
                        on:click=move |_| ui.update(UiState::request_theme_toggle)
                        aria-label=move || toggle_aria_label(&status.get())
                        title=TOGGLE_TITLE
                    >
                        <Show when=move || status.get().follows_system>
                            <span class="theme-icon theme-icon--monitor" aria-hidden="true">"🖥"</span>
                        </Show>
                        <span class=move || status.get().icon.class() aria-hidden="true">
                            {move || status.get().icon.glyph()}
                        </span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
