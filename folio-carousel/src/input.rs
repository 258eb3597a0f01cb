//! Input and outcome types for carousel interactions

use serde::{Deserialize, Serialize};

/// Keyboard keys the carousel reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    /// Anything else; ignored by the carousel.
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Every event the host can feed into a carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselInput {
    /// Page ready: read cards and build indicators.
    Initialize,
    /// Next button.
    Next,
    /// Previous button.
    Previous,
    /// Indicator (dot) click.
    GoTo { index: usize },
    /// Page-wide keydown.
    Key { key: Key },
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    /// Window resize with the new viewport width.
    Resize { viewport_width: f32 },
    /// Host signal that the track's transform transition completed.
    TransitionEnd,
}

/// Why a navigation request did not move the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// A transition is still settling.
    Animating,
    /// `previous` at the first window.
    AtStart,
    /// `next` at the last window.
    AtEnd,
    /// All cards fit on screen (or there are none).
    NothingToNavigate,
    /// No card track was found at initialization.
    Uninitialized,
}

/// Result of feeding one input to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    Moved { from: usize, to: usize },
    Ignored { reason: IgnoreReason },
}

impl Navigation {
    pub(crate) fn ignored(reason: IgnoreReason) -> Self {
        Self::Ignored { reason }
    }

    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
