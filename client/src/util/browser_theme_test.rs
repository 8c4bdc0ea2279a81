#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{THEME_STORAGE_KEY, ThemeMode};

#[test]
fn storage_reads_as_absent_outside_browser() {
    assert_eq!(LocalStoragePreference.load(THEME_STORAGE_KEY), None);
}

#[test]
fn storage_writes_report_unavailable_outside_browser() {
    assert_eq!(
        LocalStoragePreference.save(THEME_STORAGE_KEY, "dark"),
        Err(PreferenceStoreError::Unavailable)
    );
}

#[test]
fn color_scheme_reads_as_light_outside_browser() {
    let (prefers_dark, subscription) = MediaQueryColorScheme.subscribe(Box::new(|_| {}));
    assert!(!prefers_dark);
    subscription.cancel();
}

#[test]
fn document_flag_is_noop_but_callable() {
    DocumentThemeFlag.apply(EffectiveTheme::Dark);
    DocumentThemeFlag.apply(EffectiveTheme::Light);
}

#[test]
fn browser_controller_boots_to_system_light() {
    let mut theme = controller();
    let snapshot = theme.initialize(Box::new(|_| {}));
    assert_eq!(snapshot.mode, ThemeMode::System);
    assert_eq!(snapshot.effective, EffectiveTheme::Light);
}

#[test]
fn browser_controller_toggles_despite_unavailable_storage() {
    let mut theme = controller();
    theme.initialize(Box::new(|_| {}));
    assert_eq!(theme.toggle_theme().mode, ThemeMode::Light);
    assert_eq!(theme.toggle_theme().mode, ThemeMode::Dark);
    theme.dispose();
    assert!(theme.is_disposed());
}
