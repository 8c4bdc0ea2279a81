//! View-facing page state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Components read the published theme snapshot and raise intents by bumping
//! request sequence numbers. The page that owns the theme controller watches
//! those sequences and forwards them, so components never touch browser ports.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::ThemeSnapshot;

/// UI state for the homepage. Provided as `RwSignal<UiState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Latest snapshot published by the theme controller.
    pub theme: ThemeSnapshot,
    /// Incremented once per "cycle theme" click.
    pub theme_toggle_seq: u64,
}

impl UiState {
    /// Record a request to advance the theme mode.
    pub fn request_theme_toggle(&mut self) {
        self.theme_toggle_seq = self.theme_toggle_seq.wrapping_add(1);
    }
}
