//! Page configuration parsed from an optional inline JSON block.
//!
//! The host page may embed
//! `<script type="application/json" id="itinerary-config">{...}</script>`
//! with any subset of the fields below (camelCase). Missing fields keep
//! their [`crate::consts`] defaults; unknown fields are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_BOOKINGS_KEY, DEFAULT_CHECK_FLASH_MS, DEFAULT_DARK_CHROME_COLOR, DEFAULT_EXPAND_SCROLL_DELAY_MS,
    DEFAULT_HEADER_OFFSET_PX, DEFAULT_LIGHT_CHROME_COLOR, DEFAULT_PRINT_DELAY_MS, DEFAULT_PROTECTED_BOOKINGS,
    DEFAULT_RESET_PROMPT, DEFAULT_RESET_PULSE_MS, DEFAULT_SCROLL_TOP_THRESHOLD_PX, DEFAULT_SPY_ROOT_MARGIN,
    DEFAULT_THEME_KEY,
};

/// Error returned by [`ItineraryConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The block is not valid JSON or names an unknown field.
    #[error("failed to parse itinerary config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid itinerary config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Every tunable of the enhancement layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ItineraryConfig {
    pub bookings_key: String,
    pub theme_key: String,
    pub protected_bookings: BTreeSet<String>,
    pub header_offset_px: f64,
    pub spy_root_margin: String,
    pub scroll_top_threshold_px: f64,
    pub expand_scroll_delay_ms: u32,
    pub print_delay_ms: u32,
    pub check_flash_ms: u32,
    pub reset_pulse_ms: u32,
    pub dark_chrome_color: String,
    pub light_chrome_color: String,
    pub reset_prompt: String,
    /// Open the first day on load.
    pub expand_first_section: bool,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            bookings_key: DEFAULT_BOOKINGS_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            protected_bookings: DEFAULT_PROTECTED_BOOKINGS.iter().map(|id| (*id).to_string()).collect(),
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            spy_root_margin: DEFAULT_SPY_ROOT_MARGIN.to_string(),
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            expand_scroll_delay_ms: DEFAULT_EXPAND_SCROLL_DELAY_MS,
            print_delay_ms: DEFAULT_PRINT_DELAY_MS,
            check_flash_ms: DEFAULT_CHECK_FLASH_MS,
            reset_pulse_ms: DEFAULT_RESET_PULSE_MS,
            dark_chrome_color: DEFAULT_DARK_CHROME_COLOR.to_string(),
            light_chrome_color: DEFAULT_LIGHT_CHROME_COLOR.to_string(),
            reset_prompt: DEFAULT_RESET_PROMPT.to_string(),
            expand_first_section: true,
        }
    }
}

impl ItineraryConfig {
    /// Parse and validate a JSON override block.
    ///
    /// Fields absent from `raw` keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants.
    ///
    /// Booking and theme state must live under distinct, non-empty keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bookings_key.trim().is_empty() {
            return Err(invalid("bookingsKey", "must not be empty"));
        }
        if self.theme_key.trim().is_empty() {
            return Err(invalid("themeKey", "must not be empty"));
        }
        if self.bookings_key == self.theme_key {
            return Err(invalid("themeKey", "must differ from bookingsKey"));
        }
        if !self.header_offset_px.is_finite() || self.header_offset_px < 0.0 {
            return Err(invalid("headerOffsetPx", "must be a non-negative number"));
        }
        if !self.scroll_top_threshold_px.is_finite() || self.scroll_top_threshold_px < 0.0 {
            return Err(invalid("scrollTopThresholdPx", "must be a non-negative number"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_string() }
}
