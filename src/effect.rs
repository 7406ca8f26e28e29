//! DOM mutations requested by the controller.
//!
//! The controller never touches the page. Each operation returns a list of
//! [`Effect`]s and the browser host applies them in order, skipping any
//! whose target element is missing.

use crate::state::theme::ThemeView;

/// A single change for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set `data-theme` on the root, refresh the toggle button and the
    /// theme-color meta.
    ApplyTheme(ThemeView),
    /// Give a day header button semantics (`role`, `tabindex`, `aria-expanded`).
    PrepareHeader { section: String, expanded: bool },
    /// Reflect a section's state: `active` on the content, `collapsed` and
    /// `aria-expanded` on the header.
    SetSectionExpanded { section: String, expanded: bool },
    /// Smoothly scroll a section's top edge into view.
    ScrollIntoView { section: String },
    /// Smoothly scroll so `anchor` sits `clearance` pixels below the viewport top.
    ScrollToAnchor { anchor: String, clearance: f64 },
    /// Smoothly scroll the window to the document top.
    ScrollToTop,
    /// Mark nav entry `index` active and every other entry inactive.
    /// `None` clears all entries.
    SetActiveNav { index: Option<usize> },
    /// Check or uncheck a booking checkbox.
    SetChecked { booking: String, checked: bool },
    /// Dim a booking item briefly.
    FlashBooking { booking: String, duration_ms: u32 },
    /// Shrink and restore every booking item briefly.
    PulseBookings { duration_ms: u32 },
    /// Open the platform print dialog.
    Print,
    /// Run `effect` once `trigger` fires.
    Deferred { trigger: Trigger, effect: Box<Effect> },
}

/// When a [`Effect::Deferred`] effect runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// After a fixed delay.
    Delay { ms: u32 },
    /// When the section's content finishes its open transition, or after
    /// `fallback_ms`, whichever happens first.
    SectionSettled { section: String, fallback_ms: u32 },
}

impl Effect {
    /// Wrap `self` to run after `trigger`.
    #[must_use]
    pub fn after(self, trigger: Trigger) -> Self {
        Self::Deferred { trigger, effect: Box::new(self) }
    }
}
