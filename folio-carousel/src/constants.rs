//! Carousel constants
//!
//! Shared defaults for breakpoints, transition timing and gesture handling.
//! Tuning should happen here (or through [`crate::CarouselConfig`]) so the
//! lock timer and the emitted transition never disagree.

/// Viewport breakpoints that size the visible window.
pub mod breakpoints {
    /// Viewports at or below this width (px) show a single card.
    pub const MOBILE_MAX_WIDTH: f32 = 768.0;
    /// Viewports at or below this width (px) show two cards.
    pub const TABLET_MAX_WIDTH: f32 = 1024.0;
    /// Cards visible at or below [`MOBILE_MAX_WIDTH`].
    pub const MOBILE_VISIBLE: usize = 1;
    /// Cards visible at or below [`TABLET_MAX_WIDTH`].
    pub const TABLET_VISIBLE: usize = 2;
    /// Cards visible on anything wider.
    pub const DESKTOP_VISIBLE: usize = 3;
}

/// Transition and lock timing.
pub mod timing {
    /// Track transition duration (ms). Also the settle delay of the lock.
    pub const TRANSITION_MS: u64 = 600;
    /// Quiet period (ms) before a burst of resize events is applied.
    pub const RESIZE_DEBOUNCE_MS: u64 = 200;
    /// Extra time (ms) granted to a transition-end signal before the lock
    /// falls back to its deadline.
    pub const TRANSITION_END_GRACE_MS: u64 = 100;
}

/// Touch gesture handling.
pub mod gesture {
    /// Horizontal displacement (px) a swipe must exceed to navigate.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
}

/// Cubic-bezier control points for track transitions.
pub mod curves {
    /// Smooth deceleration used for direct jumps (indicator clicks).
    pub const DIRECT: [f32; 4] = [0.25, 0.46, 0.45, 0.94];
    /// Slight overshoot used for single steps (buttons, keys, swipes).
    pub const STEP: [f32; 4] = [0.34, 1.56, 0.64, 1.0];
}
