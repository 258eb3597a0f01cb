//! Viewport width to visible-card mapping

use serde::{Deserialize, Serialize};

use crate::constants::breakpoints::{
    DESKTOP_VISIBLE, MOBILE_MAX_WIDTH, MOBILE_VISIBLE, TABLET_MAX_WIDTH,
    TABLET_VISIBLE,
};

/// Width thresholds (inclusive upper bounds, px) for the three layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile_max_width: f32,
    pub tablet_max_width: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max_width: MOBILE_MAX_WIDTH,
            tablet_max_width: TABLET_MAX_WIDTH,
        }
    }
}

impl Breakpoints {
    /// Number of cards that fit side by side at `viewport_width`.
    /// Non-finite widths get the mobile layout.
    pub fn visible_cards(&self, viewport_width: f32) -> usize {
        if !viewport_width.is_finite()
            || viewport_width <= self.mobile_max_width
        {
            MOBILE_VISIBLE
        } else if viewport_width <= self.tablet_max_width {
            TABLET_VISIBLE
        } else {
            DESKTOP_VISIBLE
        }
    }
}

/// [`Breakpoints::visible_cards`] with the default thresholds.
pub fn visible_cards_for_width(viewport_width: f32) -> usize {
    Breakpoints::default().visible_cards(viewport_width)
}
