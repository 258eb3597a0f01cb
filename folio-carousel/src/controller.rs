//! Carousel controller: owns the state and arbitrates every input source

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::debounce::Debouncer;
use crate::frame::Frame;
use crate::input::{CarouselInput, IgnoreReason, Key, Navigation};
use crate::lock::AnimationLock;
use crate::state::CarouselState;
use crate::surface::{CarouselSurface, NavButton};
use crate::swipe::{SwipeDirection, SwipeTracker};
use crate::transition::{MoveKind, Transition};

/// Serializable view of the controller's model state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub current_slide: usize,
    pub total_cards: usize,
    pub visible_cards: usize,
    pub is_animating: bool,
}

/// A single carousel bound to its host surface.
///
/// All operations are synchronous. Time only enters through the `now`
/// arguments: the animation lock and the resize debounce are deadlines that
/// fire in [`Carousel::poll_timers`]. Every timed operation polls first, so
/// an expired lock never blocks an input that arrives after its deadline.
#[derive(Debug)]
pub struct Carousel<S> {
    surface: S,
    config: CarouselConfig,
    state: CarouselState,
    lock: AnimationLock,
    resize: Debouncer<f32>,
    swipe: SwipeTracker,
    initialized: bool,
}

impl<S: CarouselSurface> Carousel<S> {
    pub fn new(surface: S, config: CarouselConfig) -> Self {
        let visible = config.breakpoints.visible_cards(surface.viewport_width());
        Self {
            surface,
            state: CarouselState::new(0, visible),
            lock: AnimationLock::new(),
            resize: Debouncer::new(config.resize_debounce),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            initialized: false,
            config,
        }
    }

    pub fn with_defaults(surface: S) -> Self {
        Self::new(surface, CarouselConfig::default())
    }

    /// Read the cards, build one indicator per card and paint the first
    /// position. Without a card track the carousel stays inert.
    ///
    /// Calling it again re-reads the cards, rebuilds the indicators and
    /// re-clamps the current position.
    pub fn initialize(&mut self) {
        let elements = self.surface.elements();
        if !elements.track {
            debug!("no card track on page; carousel stays inert");
            self.initialized = false;
            return;
        }

        let total = self.surface.card_count();
        let visible = self
            .config
            .breakpoints
            .visible_cards(self.surface.viewport_width());
        let previous = self.state.current_slide();
        self.state = CarouselState::new(total, visible);
        self.state.set_current(previous);

        if elements.indicators {
            self.surface.rebuild_indicators(total);
        }
        self.initialized = true;
        debug!(total, visible, "carousel initialized");
        self.render();
    }

    /// Jump to `target` (clamped). Dropped while a transition is settling.
    pub fn go_to_slide(&mut self, target: usize, now: Instant) -> Navigation {
        self.poll_timers(now);
        if let Some(reason) = self.blocked() {
            return self.ignore("go_to_slide", reason);
        }
        self.begin_move(target, MoveKind::Jump, now)
    }

    /// Step one card forward; a no-op at the last window.
    pub fn next(&mut self, now: Instant) -> Navigation {
        self.poll_timers(now);
        if let Some(reason) = self.blocked() {
            return self.ignore("next", reason);
        }
        if self.state.at_end() {
            return self.ignore("next", IgnoreReason::AtEnd);
        }
        self.begin_move(self.state.current_slide() + 1, MoveKind::Step, now)
    }

    /// Step one card back; a no-op at the first window.
    pub fn previous(&mut self, now: Instant) -> Navigation {
        self.poll_timers(now);
        if let Some(reason) = self.blocked() {
            return self.ignore("previous", reason);
        }
        if self.state.at_start() {
            return self.ignore("previous", IgnoreReason::AtStart);
        }
        self.begin_move(self.state.current_slide() - 1, MoveKind::Step, now)
    }

    /// Arrow keys map to `previous`/`next`; other keys are not navigation.
    pub fn handle_key(&mut self, key: &Key, now: Instant) -> Option<Navigation> {
        match key {
            Key::ArrowLeft => Some(self.previous(now)),
            Key::ArrowRight => Some(self.next(now)),
            Key::Other(_) => None,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.touch_start(x);
    }

    /// Finish a touch gesture; long enough swipes step the carousel.
    pub fn touch_end(&mut self, x: f32, now: Instant) -> Option<Navigation> {
        match self.swipe.touch_end(x)? {
            SwipeDirection::Left => Some(self.next(now)),
            SwipeDirection::Right => Some(self.previous(now)),
        }
    }

    /// Record a viewport resize. The surface learns the new width at once;
    /// the reflow runs once the debounce period passes without another
    /// resize.
    pub fn handle_resize(&mut self, viewport_width: f32, now: Instant) {
        self.poll_timers(now);
        self.surface.viewport_resized(viewport_width);
        trace!(viewport_width, "resize scheduled");
        self.resize.schedule(now, viewport_width);
    }

    /// Host signal that the track transition completed.
    pub fn transition_finished(&mut self, now: Instant) {
        self.poll_timers(now);
        if self.lock.transition_finished() {
            trace!("animation lock released by transition end");
        }
    }

    /// Fire every timer due at `now`. Returns true if anything fired.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        let released = self.lock.poll(now);
        if released {
            trace!("animation lock released");
        }
        let resized = match self.resize.poll(now) {
            Some(width) => {
                self.apply_resize(width);
                true
            }
            None => false,
        };
        released || resized
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.lock.deadline(), self.resize.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Route any input. Returns `None` for inputs that are not navigation
    /// requests.
    pub fn dispatch(
        &mut self,
        input: &CarouselInput,
        now: Instant,
    ) -> Option<Navigation> {
        self.poll_timers(now);
        match input {
            CarouselInput::Initialize => {
                self.initialize();
                None
            }
            CarouselInput::Next => Some(self.next(now)),
            CarouselInput::Previous => Some(self.previous(now)),
            CarouselInput::GoTo { index } => Some(self.go_to_slide(*index, now)),
            CarouselInput::Key { key } => self.handle_key(key, now),
            CarouselInput::TouchStart { x } => {
                self.touch_start(*x);
                None
            }
            CarouselInput::TouchEnd { x } => self.touch_end(*x, now),
            CarouselInput::Resize { viewport_width } => {
                self.handle_resize(*viewport_width, now);
                None
            }
            CarouselInput::TransitionEnd => {
                self.transition_finished(now);
                None
            }
        }
    }

    /// Paint the current position onto the surface, skipping absent
    /// elements. Returns the painted frame, or `None` before initialization.
    pub fn render(&mut self) -> Option<Frame> {
        if !self.initialized {
            return None;
        }
        let elements = self.surface.elements();
        let frame = Frame::compute(&self.state, self.surface.card_width());
        let total = self.state.total_cards();

        if elements.track {
            self.surface.translate_track(frame.offset_px);
            for index in 0..total {
                self.surface
                    .set_card_active(index, frame.active_cards.contains(&index));
            }
        }
        if elements.indicators {
            for index in 0..total {
                self.surface.set_indicator_active(
                    index,
                    frame.active_indicator == Some(index),
                );
            }
        }
        for (button, enabled) in [
            (NavButton::Prev, frame.prev_enabled),
            (NavButton::Next, frame.next_enabled),
        ] {
            if elements.has_button(button) {
                self.surface.set_button_enabled(button, enabled);
            }
        }
        Some(frame)
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_slide: self.state.current_slide(),
            total_cards: self.state.total_cards(),
            visible_cards: self.state.visible_cards(),
            is_animating: self.lock.is_engaged(),
        }
    }

    pub fn current_slide(&self) -> usize {
        self.state.current_slide()
    }

    pub fn total_cards(&self) -> usize {
        self.state.total_cards()
    }

    pub fn visible_cards(&self) -> usize {
        self.state.visible_cards()
    }

    pub fn is_animating(&self) -> bool {
        self.lock.is_engaged()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn blocked(&self) -> Option<IgnoreReason> {
        if !self.initialized {
            Some(IgnoreReason::Uninitialized)
        } else if self.lock.is_engaged() {
            Some(IgnoreReason::Animating)
        } else if !self.state.can_navigate() {
            Some(IgnoreReason::NothingToNavigate)
        } else {
            None
        }
    }

    fn ignore(&self, op: &'static str, reason: IgnoreReason) -> Navigation {
        trace!(
            op,
            ?reason,
            current = self.state.current_slide(),
            "navigation ignored"
        );
        Navigation::ignored(reason)
    }

    fn begin_move(
        &mut self,
        target: usize,
        kind: MoveKind,
        now: Instant,
    ) -> Navigation {
        let from = self.state.current_slide();
        self.lock
            .engage(now, self.config.lock_release, self.config.lock_hold());
        if self.surface.elements().track {
            let transition =
                Transition::for_move(kind, self.config.transition_duration);
            self.surface.apply_transition(&transition);
        }
        let to = self.state.set_current(target);
        self.render();
        debug!(from, to, ?kind, "carousel moved");
        Navigation::Moved { from, to }
    }

    fn apply_resize(&mut self, viewport_width: f32) {
        let visible = self.config.breakpoints.visible_cards(viewport_width);
        let before = self.state.current_slide();
        self.state.set_visible_cards(visible);
        debug!(
            viewport_width,
            visible,
            before,
            after = self.state.current_slide(),
            "carousel reflowed"
        );
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::headless::HeadlessPage;
    use crate::lock::LockRelease;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn desktop(cards: usize) -> Carousel<HeadlessPage> {
        let page = HeadlessPage::new(cards, 320.0, 1200.0);
        let mut c = Carousel::with_defaults(page);
        c.initialize();
        c
    }

    #[test]
    fn initialize_builds_indicators_and_paints_origin() {
        let c = desktop(6);
        let page = c.surface();
        assert_eq!(page.indicators.len(), 6);
        assert_eq!(page.active_indicators(), vec![0]);
        assert_eq!(page.active_cards(), vec![0, 1, 2]);
        assert_eq!(page.track_offset_px, 0.0);
        assert!(!page.prev_enabled);
        assert!(page.next_enabled);
        assert_eq!(c.visible_cards(), 3);
    }

    #[test]
    fn next_engages_lock_and_uses_step_curve() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        assert_eq!(c.next(t0), Navigation::Moved { from: 0, to: 1 });
        assert!(c.is_animating());
        assert_eq!(c.next_deadline(), Some(t0 + ms(600)));
        let transition = c.surface().transition.expect("transition applied");
        assert_eq!(transition.curve, crate::CubicBezier::STEP);
        assert_eq!(c.surface().track_offset_px, 320.0);
    }

    #[test]
    fn go_to_slide_clamps_and_uses_direct_curve() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        assert_eq!(c.go_to_slide(5, t0), Navigation::Moved { from: 0, to: 3 });
        let transition = c.surface().transition.expect("transition applied");
        assert_eq!(transition.curve, crate::CubicBezier::DIRECT);
        assert_eq!(c.surface().active_indicators(), vec![3]);
        assert!(!c.surface().next_enabled);
    }

    #[test]
    fn go_to_current_slide_still_takes_lock() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        assert_eq!(c.go_to_slide(0, t0), Navigation::Moved { from: 0, to: 0 });
        assert!(c.is_animating());
    }

    #[test]
    fn transition_end_policy_releases_early() {
        let t0 = Instant::now();
        let config = CarouselConfig {
            lock_release: LockRelease::TransitionEnd,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(HeadlessPage::new(6, 320.0, 1200.0), config);
        c.initialize();

        c.next(t0);
        assert_eq!(
            c.next(t0 + ms(650)),
            Navigation::Ignored {
                reason: IgnoreReason::Animating
            }
        );
        c.transition_finished(t0 + ms(650));
        assert_eq!(c.next(t0 + ms(650)), Navigation::Moved { from: 1, to: 2 });

        // No completion signal: the fallback deadline still releases.
        assert!(c.is_animating());
        c.poll_timers(t0 + ms(650 + 700));
        assert!(!c.is_animating());
    }

    #[test]
    fn timer_policy_ignores_transition_end() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        c.next(t0);
        c.transition_finished(t0 + ms(100));
        assert!(c.is_animating());
    }

    #[test]
    fn uninitialized_carousel_ignores_navigation() {
        let t0 = Instant::now();
        let mut c = Carousel::with_defaults(HeadlessPage::new(6, 320.0, 1200.0));
        assert_eq!(
            c.next(t0),
            Navigation::Ignored {
                reason: IgnoreReason::Uninitialized
            }
        );
        assert_eq!(c.render(), None);
        assert_eq!(c.surface().paints, 0);
    }

    #[test]
    fn reinitialize_keeps_clamped_position() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        c.go_to_slide(3, t0);
        c.surface_mut().cards.truncate(4);
        c.initialize();
        assert_eq!(c.total_cards(), 4);
        assert_eq!(c.current_slide(), 1);
        assert_eq!(c.surface().indicators.len(), 4);
        assert_eq!(c.surface().active_indicators(), vec![1]);
    }

    #[test]
    fn unmapped_inputs_are_not_navigation() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        let key = CarouselInput::Key {
            key: Key::Other("Enter".into()),
        };
        assert_eq!(c.dispatch(&key, t0), None);
        assert_eq!(c.dispatch(&CarouselInput::TouchStart { x: 10.0 }, t0), None);
        assert_eq!(c.dispatch(&CarouselInput::TouchEnd { x: 0.0 }, t0), None);
        assert_eq!(c.current_slide(), 0);
        assert!(!c.is_animating());
    }

    #[test]
    fn reinitialize_after_resize_reads_new_width() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        c.handle_resize(600.0, t0 + ms(100));
        assert_eq!(c.surface().viewport_width, 600.0);

        c.poll_timers(t0 + ms(300));
        c.initialize();
        assert_eq!(c.visible_cards(), 1);
        assert_eq!(c.surface().active_cards(), vec![0]);
    }

    #[test]
    fn reinitialize_before_reflow_uses_pending_width() {
        let t0 = Instant::now();
        let mut c = desktop(6);
        c.handle_resize(900.0, t0);
        c.initialize();
        assert_eq!(c.visible_cards(), 2);
    }
}
