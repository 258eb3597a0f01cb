//! Touch swipe detection

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Finger moved right to left: reveal the next cards.
    Left,
    /// Finger moved left to right: reveal the previous cards.
    Right,
}

/// Pairs a touch start with its touch end and classifies the gesture.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Displacements at or below the threshold, and ends
    /// without a matching start, yield `None`.
    pub fn touch_end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() > self.threshold {
            Some(if diff > 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else {
            None
        }
    }
}
