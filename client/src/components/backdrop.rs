//! Decorative page chrome: blurred background blobs and the footer.

use leptos::prelude::*;

use crate::content::{COPYRIGHT_YEAR, PROFILE};

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__blob backdrop__blob--one"></div>
            <div class="backdrop__blob backdrop__blob--two"></div>
            <div class="backdrop__blob backdrop__blob--three"></div>
            <div class="backdrop__grid"></div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__text">
                {format!("© {COPYRIGHT_YEAR} {}. Built with Rust & Leptos.", PROFILE.brand)}
            </p>
        </footer>
    }
}
