//! Host surface contract
//!
//! The controller never touches a DOM (or any other widget tree) directly.
//! It reads geometry from, and writes visual state to, a [`CarouselSurface`].
//! Every element except the card track is optional; the controller checks
//! [`SurfaceElements`] and skips updates for anything the page lacks.

use serde::{Deserialize, Serialize};

use crate::transition::Transition;

/// Navigation affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavButton {
    Prev,
    Next,
}

/// Which page elements exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceElements {
    pub track: bool,
    pub indicators: bool,
    pub prev_button: bool,
    pub next_button: bool,
}

impl SurfaceElements {
    /// A page with every element present.
    pub const fn complete() -> Self {
        Self {
            track: true,
            indicators: true,
            prev_button: true,
            next_button: true,
        }
    }

    pub fn has_button(&self, button: NavButton) -> bool {
        match button {
            NavButton::Prev => self.prev_button,
            NavButton::Next => self.next_button,
        }
    }
}

impl Default for SurfaceElements {
    fn default() -> Self {
        Self::complete()
    }
}

/// Geometry source and paint target for a carousel.
pub trait CarouselSurface {
    /// Elements present on the page.
    fn elements(&self) -> SurfaceElements;

    /// Number of card elements inside the track.
    fn card_count(&self) -> usize;

    /// Rendered width of the first card, `None` when there is no card.
    fn card_width(&self) -> Option<f32>;

    /// Current viewport (window) width in px.
    fn viewport_width(&self) -> f32;

    /// The host viewport changed to `width`. Hosts that read the width live
    /// have nothing to do here.
    fn viewport_resized(&mut self, width: f32);

    /// Set the transition used by the next track translation.
    fn apply_transition(&mut self, transition: &Transition);

    /// Translate the track left by `offset_px`.
    fn translate_track(&mut self, offset_px: f32);

    fn set_card_active(&mut self, index: usize, active: bool);

    /// Replace all indicators with `count` fresh, inactive ones.
    fn rebuild_indicators(&mut self, count: usize);

    fn set_indicator_active(&mut self, index: usize, active: bool);

    fn set_button_enabled(&mut self, button: NavButton, enabled: bool);
}
