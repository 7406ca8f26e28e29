//! Light/dark theme selection and persistence.
//!
//! The preference is read from storage first, then from the OS
//! `prefers-color-scheme` signal, and defaults to dark. Applying a theme
//! persists it and yields a [`ThemeView`] for the host to render.
//!
//! TRADE-OFFS
//! ==========
//! A storage read that throws forces dark rather than consulting the OS
//! signal, so a broken backend always produces the same page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::config::ItineraryConfig;
use crate::effect::Effect;
use crate::util::storage::{KeyValueStore, Storage, StorageError};

/// Presentation mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button (the theme a click switches to).
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}",
            Self::Light => "\u{263E}",
        }
    }

    /// Accessible label of the toggle button.
    #[must_use]
    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggled().as_str())
    }

    /// Parse a stored preference.
    ///
    /// Accepts the JSON form (`"dark"`) and the bare form (`dark`) written
    /// by older versions of the page.
    #[must_use]
    pub fn parse_stored(raw: &str) -> Option<Self> {
        if let Ok(theme) = serde_json::from_str::<Self>(raw) {
            return Some(theme);
        }
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Everything the host needs to render a theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub theme: Theme,
    pub toggle_glyph: &'static str,
    pub toggle_label: String,
    /// Content of `<meta name="theme-color">`.
    pub chrome_color: String,
}

/// Owns the active theme.
#[derive(Clone, Debug)]
pub struct ThemeController {
    current: Theme,
    storage_key: String,
    dark_chrome_color: String,
    light_chrome_color: String,
}

impl ThemeController {
    #[must_use]
    pub fn new(config: &ItineraryConfig) -> Self {
        Self {
            current: Theme::default(),
            storage_key: config.theme_key.clone(),
            dark_chrome_color: config.dark_chrome_color.clone(),
            light_chrome_color: config.light_chrome_color.clone(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Pick the starting theme from a stored value and the OS signal.
    ///
    /// `os_prefers_dark` is `None` when the platform exposes no
    /// color-scheme query.
    #[must_use]
    pub fn resolve_initial(stored: Result<Option<String>, StorageError>, os_prefers_dark: Option<bool>) -> Theme {
        let stored = match stored {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("could not read theme preference, using dark: {err}");
                return Theme::Dark;
            }
        };
        if let Some(raw) = stored {
            match Theme::parse_stored(&raw) {
                Some(theme) => return theme,
                None => log::warn!("ignoring unknown stored theme {raw:?}"),
            }
        }
        match os_prefers_dark {
            Some(true) | None => Theme::Dark,
            Some(false) => Theme::Light,
        }
    }

    /// Resolve the starting theme and apply it.
    pub fn initialize<S: KeyValueStore>(&mut self, storage: &mut Storage<S>, os_prefers_dark: Option<bool>) -> Effect {
        let theme = Self::resolve_initial(storage.try_get(&self.storage_key), os_prefers_dark);
        self.apply(theme, storage)
    }

    /// Make `theme` current and persist it (best-effort).
    pub fn apply<S: KeyValueStore>(&mut self, theme: Theme, storage: &mut Storage<S>) -> Effect {
        self.current = theme;
        storage.save_json(&self.storage_key, &theme);
        Effect::ApplyTheme(self.view())
    }

    /// Swap light and dark.
    pub fn toggle<S: KeyValueStore>(&mut self, storage: &mut Storage<S>) -> Effect {
        self.apply(self.current.toggled(), storage)
    }

    /// Render data for the current theme.
    #[must_use]
    pub fn view(&self) -> ThemeView {
        let chrome_color = match self.current {
            Theme::Dark => self.dark_chrome_color.clone(),
            Theme::Light => self.light_chrome_color.clone(),
        };
        ThemeView {
            theme: self.current,
            toggle_glyph: self.current.toggle_glyph(),
            toggle_label: self.current.toggle_label(),
            chrome_color,
        }
    }
}
