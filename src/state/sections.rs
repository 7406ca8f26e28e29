//! Expand/collapse state of the itinerary day sections.
//!
//! A section is collapsible only when it has a content block; ids without
//! one (or unknown ids) are ignored by every operation.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::effect::{Effect, Trigger};
use crate::page::SectionSnapshot;

/// One day section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub has_content: bool,
    pub expanded: bool,
}

impl From<&SectionSnapshot> for Section {
    fn from(snapshot: &SectionSnapshot) -> Self {
        Self { id: snapshot.id.clone(), has_content: snapshot.has_content, expanded: snapshot.expanded }
    }
}

/// All day sections in document order.
#[derive(Clone, Debug, Default)]
pub struct Sections {
    sections: Vec<Section>,
    scroll_fallback_ms: u32,
}

impl Sections {
    #[must_use]
    pub fn new(snapshots: &[SectionSnapshot], scroll_fallback_ms: u32) -> Self {
        Self { sections: snapshots.iter().map(Section::from).collect(), scroll_fallback_ms }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Expanded state of a collapsible section; `None` for anything else.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> Option<bool> {
        self.get(id).filter(|s| s.has_content).map(|s| s.expanded)
    }

    /// Set up header semantics and optionally open the first day.
    pub fn initialize(&mut self, expand_first: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        if expand_first {
            if let Some(first) = self.sections.iter_mut().find(|s| s.has_content) {
                if !first.expanded {
                    first.expanded = true;
                    effects.push(Effect::SetSectionExpanded { section: first.id.clone(), expanded: true });
                }
            }
        }
        let headers = self
            .sections
            .iter()
            .map(|s| Effect::PrepareHeader { section: s.id.clone(), expanded: s.expanded });
        headers.chain(effects).collect()
    }

    /// Flip a section; opening it also scrolls it into view once it settles.
    pub fn toggle(&mut self, id: &str) -> Vec<Effect> {
        let fallback_ms = self.scroll_fallback_ms;
        let Some(section) = self.collapsible_mut(id) else {
            return Vec::new();
        };
        section.expanded = !section.expanded;
        let mut effects = vec![Effect::SetSectionExpanded { section: section.id.clone(), expanded: section.expanded }];
        if section.expanded {
            let trigger = Trigger::SectionSettled { section: section.id.clone(), fallback_ms };
            effects.push(Effect::ScrollIntoView { section: section.id.clone() }.after(trigger));
        }
        effects
    }

    /// Open a collapsed section without scrolling.
    pub fn expand(&mut self, id: &str) -> Vec<Effect> {
        match self.collapsible_mut(id) {
            Some(section) if !section.expanded => {
                section.expanded = true;
                vec![Effect::SetSectionExpanded { section: section.id.clone(), expanded: true }]
            }
            _ => Vec::new(),
        }
    }

    /// Open every section.
    pub fn expand_all(&mut self) -> Vec<Effect> {
        self.set_all(true)
    }

    /// Close every section.
    pub fn collapse_all(&mut self) -> Vec<Effect> {
        self.set_all(false)
    }

    fn set_all(&mut self, expanded: bool) -> Vec<Effect> {
        self.sections
            .iter_mut()
            .filter(|s| s.has_content)
            .map(|section| {
                section.expanded = expanded;
                Effect::SetSectionExpanded { section: section.id.clone(), expanded }
            })
            .collect()
    }

    fn collapsible_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id && s.has_content)
    }
}
