//! In-memory page used by tests and the simulator

use serde::{Deserialize, Serialize};

use crate::surface::{CarouselSurface, NavButton, SurfaceElements};
use crate::transition::Transition;

/// Headless stand-in for the portfolio page: a track of fixed-width cards,
/// optional indicator strip and optional prev/next buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessPage {
    pub elements: SurfaceElements,
    pub viewport_width: f32,
    pub card_width: f32,
    /// Active marker per card.
    pub cards: Vec<bool>,
    /// Active marker per indicator.
    pub indicators: Vec<bool>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub track_offset_px: f32,
    pub transition: Option<Transition>,
    /// Number of track translations applied so far.
    pub paints: usize,
}

impl HeadlessPage {
    pub fn new(card_count: usize, card_width: f32, viewport_width: f32) -> Self {
        Self {
            elements: SurfaceElements::complete(),
            viewport_width,
            card_width,
            cards: vec![false; card_count],
            indicators: Vec::new(),
            prev_enabled: true,
            next_enabled: true,
            track_offset_px: 0.0,
            transition: None,
            paints: 0,
        }
    }

    pub fn with_elements(mut self, elements: SurfaceElements) -> Self {
        self.elements = elements;
        self
    }

    pub fn active_cards(&self) -> Vec<usize> {
        positions(&self.cards)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        positions(&self.indicators)
    }
}

fn positions(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, active)| active.then_some(i))
        .collect()
}

impl CarouselSurface for HeadlessPage {
    fn elements(&self) -> SurfaceElements {
        self.elements
    }

    fn card_count(&self) -> usize {
        if self.elements.track { self.cards.len() } else { 0 }
    }

    fn card_width(&self) -> Option<f32> {
        (!self.cards.is_empty()).then_some(self.card_width)
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn viewport_resized(&mut self, width: f32) {
        self.viewport_width = width;
    }

    fn apply_transition(&mut self, transition: &Transition) {
        self.transition = Some(*transition);
    }

    fn translate_track(&mut self, offset_px: f32) {
        self.track_offset_px = offset_px;
        self.paints += 1;
    }

    fn set_card_active(&mut self, index: usize, active: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            *card = active;
        }
    }

    fn rebuild_indicators(&mut self, count: usize) {
        self.indicators = vec![false; count];
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.indicators.get_mut(index) {
            *dot = active;
        }
    }

    fn set_button_enabled(&mut self, button: NavButton, enabled: bool) {
        match button {
            NavButton::Prev => self.prev_enabled = enabled,
            NavButton::Next => self.next_enabled = enabled,
        }
    }
}
