//! Navigation links and scroll-spy highlighting.
//!
//! At most one nav entry is active. It is set either by clicking a link or
//! by the visibility observer reporting that a section entered the
//! viewport band.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::effect::Effect;
use crate::page::NavLinkSnapshot;

/// One observer report: a watched section and whether it intersects the band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub section: String,
    pub intersecting: bool,
}

/// Nav entries in document order plus the currently active one.
#[derive(Clone, Debug, Default)]
pub struct NavSpy {
    links: Vec<NavLinkSnapshot>,
    active: Option<usize>,
}

impl NavSpy {
    #[must_use]
    pub fn new(links: &[NavLinkSnapshot]) -> Self {
        Self { links: links.to_vec(), active: None }
    }

    /// Index of the active entry.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Target id of the active entry.
    #[must_use]
    pub fn active_target(&self) -> Option<&str> {
        self.active.and_then(|index| self.links.get(index)).and_then(NavLinkSnapshot::target)
    }

    /// Link at `index`, if its target exists on the page.
    #[must_use]
    pub fn resolve(&self, index: usize) -> Option<&str> {
        self.links.get(index).filter(|link| link.target_present).and_then(NavLinkSnapshot::target)
    }

    /// Make `index` the sole active entry.
    pub fn activate(&mut self, index: usize) -> Effect {
        self.active = Some(index);
        Effect::SetActiveNav { index: self.active }
    }

    /// Apply one observer batch.
    ///
    /// Every intersecting section with a matching link activates it in
    /// turn, so the last one in the batch wins. Returns the highlight
    /// change, if any.
    pub fn observe(&mut self, batch: &[Intersection]) -> Option<Effect> {
        let mut changed = false;
        for entry in batch.iter().filter(|e| e.intersecting) {
            let href = format!("#{}", entry.section);
            if let Some(index) = self.links.iter().position(|link| link.href == href) {
                changed |= self.active != Some(index);
                self.active = Some(index);
            }
        }
        changed.then_some(Effect::SetActiveNav { index: self.active })
    }
}

/// Window scroll position that puts an element at `offset_top` just below
/// a sticky header of height `clearance`.
#[must_use]
pub fn scroll_target(offset_top: f64, clearance: f64) -> f64 {
    offset_top - clearance
}
