//! Light/dark colour-mode preference.
//!
//! An explicitly chosen mode is stored as the raw string `light` or `dark`
//! (not JSON). Until one is stored the preference tracks the system scheme.

use tracing::{debug, warn};

use backoffice_core::ColorMode;

use crate::storage::{Storage, keys};

/// Resolved colour mode plus the explicit choice, if any.
#[derive(Debug, Clone)]
pub struct ColorModePreference {
    storage: Storage,
    mode: ColorMode,
}

impl ColorModePreference {
    /// Resolve the initial mode: the stored choice, otherwise `system`.
    #[must_use]
    pub fn new(storage: Storage, system: ColorMode) -> Self {
        let mode = stored(&storage).unwrap_or(system);
        Self { storage, mode }
    }

    /// The mode currently in effect.
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// The explicitly stored choice. Anything other than exactly `light` or
    /// `dark` counts as no choice.
    #[must_use]
    pub fn stored(&self) -> Option<ColorMode> {
        stored(&self.storage)
    }

    /// Switch to `mode` and remember it as an explicit choice.
    ///
    /// Persisting is best effort; a failed write only logs a warning.
    pub fn set(&mut self, mode: ColorMode) {
        self.mode = mode;
        if let Err(e) = self.storage.set_raw(keys::COLOR_MODE, mode.as_str()) {
            warn!(error = %e, "Failed to persist colour mode");
        }
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle(&mut self) -> ColorMode {
        let next = self.mode.toggled();
        self.set(next);
        next
    }

    /// React to a change in the system scheme. Ignored once a choice is stored.
    pub fn system_changed(&mut self, system: ColorMode) {
        if self.stored().is_none() {
            debug!(%system, "Following system colour scheme");
            self.mode = system;
        }
    }
}

fn stored(storage: &Storage) -> Option<ColorMode> {
    match storage.get_raw(keys::COLOR_MODE)?.as_str() {
        "light" => Some(ColorMode::Light),
        "dark" => Some(ColorMode::Dark),
        _ => None,
    }
}
