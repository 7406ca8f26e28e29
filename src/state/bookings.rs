//! Booking checklist state, persisted as a flat id → checked map.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::config::ItineraryConfig;
use crate::effect::Effect;
use crate::page::CheckboxSnapshot;
use crate::util::storage::{KeyValueStore, Storage};

/// Persisted form of the checklist.
pub type BookingState = BTreeMap<String, bool>;

/// Completion count of the checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.checked, self.total)
    }
}

/// One checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingItem {
    pub id: String,
    pub checked: bool,
}

/// All booking checkboxes in document order.
#[derive(Clone, Debug)]
pub struct BookingChecklist {
    items: Vec<BookingItem>,
    protected: BTreeSet<String>,
    storage_key: String,
    flash_ms: u32,
    pulse_ms: u32,
    reset_prompt: String,
}

impl BookingChecklist {
    #[must_use]
    pub fn new(checkboxes: &[CheckboxSnapshot], config: &ItineraryConfig) -> Self {
        Self {
            items: checkboxes.iter().map(|c| BookingItem { id: c.id.clone(), checked: c.checked }).collect(),
            protected: config.protected_bookings.clone(),
            storage_key: config.bookings_key.clone(),
            flash_ms: config.check_flash_ms,
            pulse_ms: config.reset_pulse_ms,
            reset_prompt: config.reset_prompt.clone(),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &BookingItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.items.iter().find(|i| i.id == id).map(|i| i.checked)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress { checked: self.items.iter().filter(|i| i.checked).count(), total: self.items.len() }
    }

    /// Current state of every checkbox.
    #[must_use]
    pub fn snapshot(&self) -> BookingState {
        self.items.iter().map(|i| (i.id.clone(), i.checked)).collect()
    }

    /// Apply the persisted checklist to the checkboxes still on the page.
    ///
    /// Ids that no longer exist are ignored; malformed data leaves the
    /// markup defaults in place.
    pub fn restore<S: KeyValueStore>(&mut self, storage: &Storage<S>) -> Vec<Effect> {
        let Some(saved) = storage.load_json::<BookingState>(&self.storage_key) else {
            return Vec::new();
        };
        let mut effects = Vec::new();
        for item in &mut self.items {
            if let Some(&checked) = saved.get(&item.id) {
                item.checked = checked;
                effects.push(Effect::SetChecked { booking: item.id.clone(), checked });
            }
        }
        effects
    }

    /// Record a user change, persist the checklist and dim the item if it
    /// was just checked.
    pub fn set_checked<S: KeyValueStore>(&mut self, id: &str, checked: bool, storage: &mut Storage<S>) -> Vec<Effect> {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return Vec::new();
        };
        item.checked = checked;
        self.persist(storage);
        self.log_progress();
        if checked {
            vec![Effect::FlashBooking { booking: id.to_string(), duration_ms: self.flash_ms }]
        } else {
            Vec::new()
        }
    }

    /// Clear every unprotected checkbox after the user confirms.
    ///
    /// `confirm` receives the prompt text; declining changes nothing.
    pub fn reset<S: KeyValueStore>(
        &mut self,
        confirm: impl FnOnce(&str) -> bool,
        storage: &mut Storage<S>,
    ) -> Vec<Effect> {
        if !confirm(&self.reset_prompt) {
            return Vec::new();
        }
        let protected = &self.protected;
        let mut effects: Vec<Effect> = self
            .items
            .iter_mut()
            .filter(|item| !protected.contains(&item.id))
            .map(|item| {
                item.checked = false;
                Effect::SetChecked { booking: item.id.clone(), checked: false }
            })
            .collect();
        self.persist(storage);
        self.log_progress();
        effects.push(Effect::PulseBookings { duration_ms: self.pulse_ms });
        effects
    }

    /// Log the completion count.
    pub fn log_progress(&self) {
        log::info!("Bookings: {} completed", self.progress());
    }

    fn persist<S: KeyValueStore>(&self, storage: &mut Storage<S>) {
        storage.save_json(&self.storage_key, &self.snapshot());
    }
}
