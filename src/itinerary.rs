//! Top-level controller for the itinerary page.

use crate::config::ItineraryConfig;
use crate::effect::{Effect, Trigger};
use crate::page::PageSnapshot;
use crate::state::bookings::{BookingChecklist, Progress};
use crate::state::nav::{Intersection, NavSpy};
use crate::state::sections::Sections;
use crate::state::theme::{Theme, ThemeController};
use crate::util::keyboard::{Modifiers, Shortcut, resolve_shortcut};
use crate::util::storage::{KeyValueStore, Storage};

#[cfg(test)]
#[path = "itinerary_test.rs"]
mod itinerary_test;

/// Outcome of a global keydown.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOutcome {
    /// Whether the browser default must be suppressed.
    pub prevent_default: bool,
    pub effects: Vec<Effect>,
}

/// All page state: the single owner behind every event handler.
///
/// Holds no browser handles so it can be driven directly from tests; the
/// `browser` module feeds it DOM events and applies the returned effects.
pub struct Itinerary<S> {
    config: ItineraryConfig,
    storage: Storage<S>,
    theme: ThemeController,
    sections: Sections,
    bookings: BookingChecklist,
    nav: NavSpy,
}

impl<S: KeyValueStore> Itinerary<S> {
    pub fn new(config: ItineraryConfig, page: &PageSnapshot, store: S) -> Self {
        Self {
            theme: ThemeController::new(&config),
            sections: Sections::new(&page.sections, config.expand_scroll_delay_ms),
            bookings: BookingChecklist::new(&page.checkboxes, &config),
            nav: NavSpy::new(&page.nav_links),
            storage: Storage::new(store),
            config,
        }
    }

    // --- Lifecycle ---

    /// Restore persisted state and prepare the markup.
    ///
    /// `os_prefers_dark` is the `prefers-color-scheme: dark` match, or
    /// `None` when the platform cannot answer.
    pub fn initialize(&mut self, os_prefers_dark: Option<bool>) -> Vec<Effect> {
        let mut effects = vec![self.theme.initialize(&mut self.storage, os_prefers_dark)];
        effects.extend(self.sections.initialize(self.config.expand_first_section));
        effects.extend(self.bookings.restore(&self.storage));
        self.bookings.log_progress();
        effects
    }

    // --- Theme ---

    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        vec![self.theme.toggle(&mut self.storage)]
    }

    pub fn set_theme(&mut self, theme: Theme) -> Vec<Effect> {
        vec![self.theme.apply(theme, &mut self.storage)]
    }

    // --- Sections ---

    pub fn toggle_section(&mut self, id: &str) -> Vec<Effect> {
        self.sections.toggle(id)
    }

    pub fn expand_all(&mut self) -> Vec<Effect> {
        self.sections.expand_all()
    }

    pub fn collapse_all(&mut self) -> Vec<Effect> {
        self.sections.collapse_all()
    }

    /// Open everything, then print once the layout has reflowed.
    pub fn print_itinerary(&mut self) -> Vec<Effect> {
        let mut effects = self.sections.expand_all();
        effects.push(Effect::Print.after(Trigger::Delay { ms: self.config.print_delay_ms }));
        effects
    }

    // --- Bookings ---

    pub fn booking_changed(&mut self, id: &str, checked: bool) -> Vec<Effect> {
        self.bookings.set_checked(id, checked, &mut self.storage)
    }

    /// Clear unprotected bookings if `confirm` accepts the prompt.
    pub fn reset_bookings(&mut self, confirm: impl FnOnce(&str) -> bool) -> Vec<Effect> {
        self.bookings.reset(confirm, &mut self.storage)
    }

    // --- Navigation ---

    /// Handle a click on nav entry `index`.
    ///
    /// Opens a collapsed target section, scrolls it below the sticky
    /// header and highlights the entry. Links to absent targets do nothing.
    pub fn nav_clicked(&mut self, index: usize) -> Vec<Effect> {
        let Some(target) = self.nav.resolve(index).map(str::to_string) else {
            return Vec::new();
        };
        let mut effects = self.sections.expand(&target);
        effects.push(Effect::ScrollToAnchor { anchor: target, clearance: self.config.header_offset_px });
        effects.push(self.nav.activate(index));
        effects
    }

    /// Feed one scroll-spy observer batch.
    pub fn sections_observed(&mut self, batch: &[Intersection]) -> Vec<Effect> {
        self.nav.observe(batch).into_iter().collect()
    }

    // --- Keyboard ---

    /// Dispatch a global keydown to the bulk actions.
    pub fn key_down(&mut self, key: &str, modifiers: Modifiers) -> KeyOutcome {
        let effects = match resolve_shortcut(key, modifiers) {
            Some(Shortcut::ExpandAll) => self.expand_all(),
            Some(Shortcut::CollapseAll) => self.collapse_all(),
            Some(Shortcut::Print) => self.print_itinerary(),
            None => return KeyOutcome { prevent_default: false, effects: Vec::new() },
        };
        KeyOutcome { prevent_default: true, effects }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ItineraryConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn section_expanded(&self, id: &str) -> Option<bool> {
        self.sections.is_expanded(id)
    }

    #[must_use]
    pub fn booking_checked(&self, id: &str) -> Option<bool> {
        self.bookings.is_checked(id)
    }

    #[must_use]
    pub fn booking_progress(&self) -> Progress {
        self.bookings.progress()
    }

    #[must_use]
    pub fn active_nav(&self) -> Option<usize> {
        self.nav.active()
    }

    /// Hand the storage backend back, e.g. to simulate a page reload.
    pub fn into_store(self) -> S {
        self.storage.into_store()
    }
}
