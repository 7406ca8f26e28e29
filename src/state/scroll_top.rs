//! Floating scroll-to-top control state.
//!
//! Visibility is a pure function of the vertical scroll offset and is
//! recomputed on every scroll event; hover only lifts the button.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use crate::consts::SCROLL_TOP_HOVER_LIFT_PX;

/// Whether the control shows at scroll offset `scroll_y`.
#[must_use]
pub fn is_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTopState {
    threshold: f64,
    visible: bool,
    hovered: bool,
}

impl ScrollTopState {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false, hovered: false }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.visible = is_visible(scroll_y, self.threshold);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// CSS opacity value.
    #[must_use]
    pub fn opacity(&self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }

    /// CSS transform value.
    #[must_use]
    pub fn transform(&self) -> String {
        if self.hovered {
            format!("translateY(-{SCROLL_TOP_HOVER_LIFT_PX}px)")
        } else {
            "translateY(0)".to_string()
        }
    }
}
