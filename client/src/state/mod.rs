//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `theme` and `disclosure` hold the page's only decision logic and have no
//! Leptos dependency. `ui` is the signal-friendly view state components share
//! through context.

pub mod disclosure;
pub mod theme;
pub mod ui;
