//! Render output: the visual state derived from [`CarouselState`]

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::state::CarouselState;

/// Everything the host needs to paint one carousel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Leftward translation of the track in px.
    pub offset_px: f32,
    /// Cards marked active (inside the visible window).
    pub active_cards: Range<usize>,
    /// Indicator marked active; `None` when there are no cards.
    pub active_indicator: Option<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Frame {
    /// Derive a frame. Cards are laid out edge to edge, so the offset is
    /// `current_slide * card_width`. A missing or non-finite width renders
    /// at offset zero.
    pub fn compute(state: &CarouselState, card_width: Option<f32>) -> Self {
        let width = card_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(0.0);
        let current = state.current_slide();
        Self {
            offset_px: current as f32 * width,
            active_cards: state.visible_range(),
            active_indicator: (state.total_cards() > 0).then_some(current),
            prev_enabled: !state.at_start(),
            next_enabled: !state.at_end(),
        }
    }

    /// CSS transform for the track.
    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset_px)
    }
}
