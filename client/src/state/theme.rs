//! Theme preference resolution and persistence.
//!
//! DESIGN
//! ======
//! `ThemeController` owns the user's tri-state [`ThemeMode`] and the observed
//! OS color-scheme preference, and derives the [`EffectiveTheme`] from them.
//! Browser concerns enter through three ports so the state machine runs the
//! same under SSR, hydration, and unit tests:
//!
//! - [`PreferenceStore`]: durable key-value storage for the chosen mode.
//! - [`ColorSchemeSignal`]: subscribable "prefers dark" signal.
//! - [`ThemeSurface`]: the document-level dark flag.
//!
//! LIFECYCLE
//! =========
//! `initialize` acquires the OS subscription and reads storage without
//! writing it. `dispose` (or drop) releases the subscription exactly once.
//! Only `toggle_theme` changes the mode, and only it persists.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the persisted [`ThemeMode`].
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// MODES
// =============================================================================

/// The user's explicit theme choice. `System` defers to the OS preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// All modes in toggle order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Next mode in the `system -> light -> dark -> system` cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve the rendered theme for this mode given the OS preference.
    #[must_use]
    pub fn resolve(self, os_prefers_dark: bool) -> EffectiveTheme {
        match self {
            Self::System => EffectiveTheme::from_dark(os_prefers_dark),
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
        }
    }

    /// Interpret a persisted value. Absent or unrecognized values read as `System`.
    #[must_use]
    pub fn from_persisted(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            _ => Self::System,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored string that is not one of `system`, `light`, `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode: {0:?}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownThemeMode(other.to_owned())),
        }
    }
}

/// The theme actually rendered. Derived, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Immutable view of the controller published to the UI after each transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub effective: EffectiveTheme,
    pub os_prefers_dark: bool,
}

impl ThemeSnapshot {
    #[must_use]
    pub fn new(mode: ThemeMode, os_prefers_dark: bool) -> Self {
        Self { mode, effective: mode.resolve(os_prefers_dark), os_prefers_dark }
    }
}

// =============================================================================
// PORTS
// =============================================================================

/// Failure writing the persisted preference. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceStoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write: {0}")]
    Rejected(String),
}

/// Durable per-user key-value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when storage is missing or refuses the write.
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError>;
}

/// Callback invoked with the new "prefers dark" value on every OS change.
pub type ColorSchemeListener = Box<dyn Fn(bool)>;

/// Handle for a live OS color-scheme subscription.
pub trait ColorSchemeSubscription {
    /// Detach the listener. Consumes the handle so it cannot run twice.
    fn cancel(self);
}

/// Subscribable OS "prefers dark color scheme" signal.
pub trait ColorSchemeSignal {
    type Subscription: ColorSchemeSubscription;

    /// Register `listener` and return the preference observed under that same
    /// registration, so no change falls between the read and the subscribe.
    fn subscribe(&self, listener: ColorSchemeListener) -> (bool, Self::Subscription);
}

/// Document-level presentation flag that style rules key on.
pub trait ThemeSurface {
    fn apply(&self, theme: EffectiveTheme);
}

// =============================================================================
// CONTROLLER
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Active,
    Disposed,
}

/// Resolves and persists the page theme through injected ports.
pub struct ThemeController<P, S: ColorSchemeSignal, T> {
    store: P,
    signal: S,
    surface: T,
    mode: ThemeMode,
    os_prefers_dark: bool,
    lifecycle: Lifecycle,
    subscription: Option<S::Subscription>,
}

impl<P, S, T> ThemeController<P, S, T>
where
    P: PreferenceStore,
    S: ColorSchemeSignal,
    T: ThemeSurface,
{
    pub fn new(store: P, signal: S, surface: T) -> Self {
        Self {
            store,
            signal,
            surface,
            mode: ThemeMode::System,
            os_prefers_dark: false,
            lifecycle: Lifecycle::Created,
            subscription: None,
        }
    }

    /// Subscribe to the OS signal, load the persisted mode, and apply the
    /// resulting theme once. Never writes storage. A second call is a no-op.
    pub fn initialize(&mut self, listener: ColorSchemeListener) -> ThemeSnapshot {
        if self.lifecycle != Lifecycle::Created {
            return self.snapshot();
        }

        let (os_prefers_dark, subscription) = self.signal.subscribe(listener);
        self.os_prefers_dark = os_prefers_dark;
        self.subscription = Some(subscription);

        let stored = self.store.load(THEME_STORAGE_KEY);
        self.mode = ThemeMode::from_persisted(stored.as_deref());
        self.lifecycle = Lifecycle::Active;

        let effective = self.effective_theme();
        self.surface.apply(effective);
        log::debug!(
            "theme initialized: mode={} effective={} os_dark={}",
            self.mode,
            effective.as_str(),
            self.os_prefers_dark
        );
        self.snapshot()
    }

    /// Record an OS preference change. Reapplies the theme only while the
    /// mode is `System`. Ignored unless the controller is active.
    pub fn on_os_preference_changed(&mut self, prefers_dark: bool) -> ThemeSnapshot {
        if self.lifecycle != Lifecycle::Active {
            return self.snapshot();
        }

        self.os_prefers_dark = prefers_dark;
        if self.mode == ThemeMode::System {
            self.surface.apply(self.effective_theme());
        }
        self.snapshot()
    }

    /// Advance to the next mode, reapply, and persist the new mode.
    ///
    /// Persistence is best-effort: a failed write is logged and the in-memory
    /// mode stays authoritative. Nothing is written before `initialize` or
    /// after `dispose`.
    pub fn toggle_theme(&mut self) -> ThemeSnapshot {
        self.mode = self.mode.next();
        self.surface.apply(self.effective_theme());

        if self.lifecycle == Lifecycle::Active {
            if let Err(err) = self.store.save(THEME_STORAGE_KEY, self.mode.as_str()) {
                log::warn!("theme preference not persisted: {err}");
            }
        }
        self.snapshot()
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.mode.resolve(self.os_prefers_dark)
    }

    #[must_use]
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot::new(self.mode, self.os_prefers_dark)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.lifecycle != Lifecycle::Created
    }
}

impl<P, S: ColorSchemeSignal, T> ThemeController<P, S, T> {
    /// Release the OS subscription. Safe to call more than once; a disposed
    /// controller never initializes again.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        self.lifecycle = Lifecycle::Disposed;
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }
}

impl<P, S: ColorSchemeSignal, T> Drop for ThemeController<P, S, T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<P, S: ColorSchemeSignal, T> fmt::Debug for ThemeController<P, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode)
            .field("os_prefers_dark", &self.os_prefers_dark)
            .field("lifecycle", &self.lifecycle)
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
