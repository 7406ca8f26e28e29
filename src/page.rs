//! Snapshot of the static itinerary markup, taken once at load.
//!
//! The browser host fills this in from the DOM; tests build it by hand.

/// One `.day-section` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSnapshot {
    /// Element id, used by links and `toggleDay`.
    pub id: String,
    /// Whether the section contains a `.day-content` block.
    pub has_content: bool,
    /// Whether that content already carries the `active` class.
    pub expanded: bool,
}

impl SectionSnapshot {
    /// A collapsed section with content.
    #[must_use]
    pub fn collapsed(id: &str) -> Self {
        Self { id: id.to_string(), has_content: true, expanded: false }
    }
}

/// One booking checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxSnapshot {
    pub id: String,
    pub checked: bool,
}

/// One `.nav-links a` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkSnapshot {
    /// The `href` attribute as written, e.g. `"#day2"`.
    pub href: String,
    /// Whether an element with the referenced id exists.
    pub target_present: bool,
}

impl NavLinkSnapshot {
    /// Id referenced by the link, if the href is an in-page anchor.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        anchor_target(&self.href)
    }
}

/// Everything the controller needs to know about the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub sections: Vec<SectionSnapshot>,
    pub checkboxes: Vec<CheckboxSnapshot>,
    pub nav_links: Vec<NavLinkSnapshot>,
}

/// Strip the leading `#` from an in-page href.
///
/// Returns `None` for empty anchors and for hrefs pointing elsewhere.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
