//! Browser-backed ports for the theme controller.
//!
//! `localStorage` holds the chosen mode, `matchMedia` supplies the OS
//! preference, and the `<html>` element carries the `dark` class plus a
//! `data-theme` attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside `hydrate` every port is inert: loads read as absent, writes report
//! `Unavailable`, and the OS signal reads as light. SSR output therefore always
//! renders the `system`/light default and the browser corrects it after mount.

#[cfg(test)]
#[path = "browser_theme_test.rs"]
mod browser_theme_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::state::theme::{
    ColorSchemeListener, ColorSchemeSignal, ColorSchemeSubscription, EffectiveTheme, PreferenceStore,
    PreferenceStoreError, ThemeController, ThemeSurface,
};

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";

/// Theme controller wired to the live browser.
pub type BrowserThemeController = ThemeController<LocalStoragePreference, MediaQueryColorScheme, DocumentThemeFlag>;

/// Build an uninitialized controller over the browser ports.
#[must_use]
pub fn controller() -> BrowserThemeController {
    ThemeController::new(LocalStoragePreference, MediaQueryColorScheme, DocumentThemeFlag)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage` as a [`PreferenceStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreference;

impl PreferenceStore for LocalStoragePreference {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(PreferenceStoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| PreferenceStoreError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(PreferenceStoreError::Unavailable)
        }
    }
}

// =============================================================================
// OS SIGNAL
// =============================================================================

/// `matchMedia("(prefers-color-scheme: dark)")` as a [`ColorSchemeSignal`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryColorScheme;

/// Registered `change` listener. Dropping it without `cancel` leaks the
/// listener registration, so the controller always cancels explicitly.
pub struct MediaQuerySubscription {
    #[cfg(feature = "hydrate")]
    registration: Option<(web_sys::MediaQueryList, Closure<dyn Fn(web_sys::MediaQueryListEvent)>)>,
}

impl ColorSchemeSubscription for MediaQuerySubscription {
    fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            let Some((query, callback)) = self.registration else {
                return;
            };
            if let Err(err) = query.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
                log::warn!("failed to detach color-scheme listener: {err:?}");
            }
        }
    }
}

impl ColorSchemeSignal for MediaQueryColorScheme {
    type Subscription = MediaQuerySubscription;

    fn subscribe(&self, listener: ColorSchemeListener) -> (bool, MediaQuerySubscription) {
        #[cfg(feature = "hydrate")]
        {
            let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
                log::warn!("matchMedia unavailable; assuming light color scheme");
                return (false, MediaQuerySubscription { registration: None });
            };

            let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
            );
            if let Err(err) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
                log::warn!("failed to attach color-scheme listener: {err:?}");
                return (query.matches(), MediaQuerySubscription { registration: None });
            }

            // Read after attaching: a flip during registration is seen either
            // here or by the listener.
            let prefers_dark = query.matches();
            (prefers_dark, MediaQuerySubscription { registration: Some((query, callback)) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(listener);
            (false, MediaQuerySubscription {})
        }
    }
}

// =============================================================================
// DOCUMENT FLAG
// =============================================================================

/// The `<html>` element's `dark` class as a [`ThemeSurface`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentThemeFlag;

impl ThemeSurface for DocumentThemeFlag {
    fn apply(&self, theme: EffectiveTheme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            let toggled = if theme.is_dark() { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
            if let Err(err) = toggled.and_then(|()| root.set_attribute("data-theme", theme.as_str())) {
                log::warn!("failed to apply {} theme: {err:?}", theme.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}
