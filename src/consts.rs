//! Shared defaults for the itinerary crate.
//!
//! Every value here can be overridden through [`crate::config::ItineraryConfig`].

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the booking id → checked map.
pub const DEFAULT_BOOKINGS_KEY: &str = "londonItineraryBookings";

/// `localStorage` key holding the theme preference.
pub const DEFAULT_THEME_KEY: &str = "londonTheme";

/// Booking ids that a reset never clears (an already confirmed reservation).
pub const DEFAULT_PROTECTED_BOOKINGS: &[&str] = &["booking4"];

// ── Navigation ──────────────────────────────────────────────────

/// Clearance subtracted from a section's offset so the sticky nav does not cover it.
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;

/// Root margin of the scroll-spy observer band.
pub const DEFAULT_SPY_ROOT_MARGIN: &str = "-100px 0px -66%";

// ── Scroll-to-top ───────────────────────────────────────────────

/// Vertical scroll offset past which the scroll-to-top control shows.
pub const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Upward shift applied to the control while hovered.
pub const SCROLL_TOP_HOVER_LIFT_PX: f64 = 5.0;

// ── Timing ──────────────────────────────────────────────────────

/// Fallback wait before scrolling an expanded section into view.
pub const DEFAULT_EXPAND_SCROLL_DELAY_MS: u32 = 100;

/// Wait after expanding everything before opening the print dialog.
pub const DEFAULT_PRINT_DELAY_MS: u32 = 500;

/// Duration of the dimmed state on a freshly checked booking.
pub const DEFAULT_CHECK_FLASH_MS: u32 = 300;

/// Duration of the shrink pulse applied to all bookings on reset.
pub const DEFAULT_RESET_PULSE_MS: u32 = 200;

// ── Theme ───────────────────────────────────────────────────────

/// Mobile browser chrome color while the dark theme is active.
pub const DEFAULT_DARK_CHROME_COLOR: &str = "#1c1e26";

/// Mobile browser chrome color while the light theme is active.
pub const DEFAULT_LIGHT_CHROME_COLOR: &str = "#ffffff";

// ── Prompts ─────────────────────────────────────────────────────

/// Confirmation text shown before clearing the checklist.
pub const DEFAULT_RESET_PROMPT: &str = "Reset all booking checkboxes? This will clear your progress.";
