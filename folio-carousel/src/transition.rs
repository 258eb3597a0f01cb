//! Transition commands applied to the card track before a move

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::curves;

/// Timing curve of a track transition, as cubic-bezier control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier(pub [f32; 4]);

impl CubicBezier {
    /// Curve for direct jumps to an arbitrary index.
    pub const DIRECT: Self = Self(curves::DIRECT);
    /// Curve for single-step moves.
    pub const STEP: Self = Self(curves::STEP);
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x1, y1, x2, y2] = self.0;
        write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

/// Which kind of move produced a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// `go_to_slide`: dot clicks and programmatic jumps.
    Jump,
    /// `next` / `previous`: buttons, arrow keys, swipes.
    Step,
}

/// A transform transition the host should apply to the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: Duration,
    pub curve: CubicBezier,
}

impl Transition {
    pub fn for_move(kind: MoveKind, duration: Duration) -> Self {
        let curve = match kind {
            MoveKind::Jump => CubicBezier::DIRECT,
            MoveKind::Step => CubicBezier::STEP,
        };
        Self { duration, curve }
    }

    /// CSS `transition` shorthand for the track's transform.
    pub fn css(&self) -> String {
        format!("transform {}s {}", self.duration.as_secs_f32(), self.curve)
    }
}
