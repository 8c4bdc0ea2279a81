use super::*;
use crate::state::theme::{EffectiveTheme, ThemeMode};

#[test]
fn ui_state_default_follows_system_light() {
    let state = UiState::default();
    assert_eq!(state.theme.mode, ThemeMode::System);
    assert_eq!(state.theme.effective, EffectiveTheme::Light);
    assert_eq!(state.theme_toggle_seq, 0);
}

#[test]
fn request_theme_toggle_bumps_sequence() {
    let mut state = UiState::default();
    state.request_theme_toggle();
    state.request_theme_toggle();
    assert_eq!(state.theme_toggle_seq, 2);
}

#[test]
fn request_theme_toggle_wraps_instead_of_overflowing() {
    let mut state = UiState { theme_toggle_seq: u64::MAX, ..UiState::default() };
    state.request_theme_toggle();
    assert_eq!(state.theme_toggle_seq, 0);
}

#[test]
fn request_theme_toggle_leaves_snapshot_alone() {
    let mut state = UiState::default();
    let before = state.theme;
    state.request_theme_toggle();
    assert_eq!(state.theme, before);
}
