//! CarouselState: clamped index arithmetic for the visible window

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Index state of a finite (non-wrapping) carousel.
///
/// `current_slide` is always kept inside `[0, max_index()]`, where
/// `max_index()` is `total_cards - visible_cards` saturated at zero. When
/// every card already fits on screen the only valid index is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    current_slide: usize,
    total_cards: usize,
    visible_cards: usize,
}

impl CarouselState {
    pub fn new(total_cards: usize, visible_cards: usize) -> Self {
        Self {
            current_slide: 0,
            total_cards,
            visible_cards: visible_cards.max(1),
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn visible_cards(&self) -> usize {
        self.visible_cards
    }

    /// Last index a window can start at.
    pub fn max_index(&self) -> usize {
        self.total_cards.saturating_sub(self.visible_cards)
    }

    /// Clamp an arbitrary target into the reachable range.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.max_index())
    }

    /// True when there is more than one reachable window.
    pub fn can_navigate(&self) -> bool {
        self.max_index() > 0
    }

    pub fn at_start(&self) -> bool {
        self.current_slide == 0
    }

    pub fn at_end(&self) -> bool {
        self.current_slide >= self.max_index()
    }

    /// Cards currently inside the visible window.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_slide.min(self.total_cards);
        let end = (self.current_slide + self.visible_cards).min(self.total_cards);
        start..end
    }

    /// Move to `index` after clamping. Returns the index actually applied.
    pub fn set_current(&mut self, index: usize) -> usize {
        self.current_slide = self.clamp(index);
        self.current_slide
    }

    /// Replace the window size (e.g. after a breakpoint change) and re-clamp.
    pub fn set_visible_cards(&mut self, visible: usize) {
        self.visible_cards = visible.max(1);
        self.current_slide = self.clamp(self.current_slide);
    }
}
