use std::time::Duration;

use folio_carousel::{
    Carousel, CarouselInput, HeadlessPage, IgnoreReason, Key, Navigation,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::Instant;

const SETTLE: Duration = Duration::from_millis(600);

fn carousel(cards: usize, viewport: f32) -> Carousel<HeadlessPage> {
    let page = HeadlessPage::new(cards, 300.0, viewport);
    let mut c = Carousel::with_defaults(page);
    c.initialize();
    c
}

fn ignored(reason: IgnoreReason) -> Navigation {
    Navigation::Ignored { reason }
}

fn assert_page_consistent(c: &Carousel<HeadlessPage>) {
    let page = c.surface();
    let current = c.current_slide();
    let total = c.total_cards();
    let window_end = (current + c.visible_cards()).min(total);

    assert_eq!(page.active_cards(), (current..window_end).collect::<Vec<_>>());
    if total == 0 {
        assert!(page.active_indicators().is_empty());
    } else {
        assert_eq!(page.active_indicators(), vec![current]);
    }
    assert_eq!(page.prev_enabled, current != 0);
    assert_eq!(
        page.next_enabled,
        current < total.saturating_sub(c.visible_cards())
    );
    assert_eq!(page.track_offset_px, current as f32 * page.card_width);
}

#[test]
fn desktop_walk_to_boundary() {
    let mut now = Instant::now();
    let mut c = carousel(6, 1200.0);
    assert_eq!(c.visible_cards(), 3);
    assert_eq!(c.current_slide(), 0);

    for expected in 1..=3 {
        assert_eq!(
            c.next(now),
            Navigation::Moved {
                from: expected - 1,
                to: expected
            }
        );
        now += SETTLE;
    }
    assert_eq!(c.current_slide(), 3);

    assert_eq!(c.next(now), ignored(IgnoreReason::AtEnd));
    assert_eq!(c.current_slide(), 3);
    assert!(!c.is_animating(), "boundary no-op must not take the lock");
    assert_page_consistent(&c);
}

#[test]
fn previous_at_start_is_noop() {
    let now = Instant::now();
    let mut c = carousel(6, 1200.0);
    let before = c.snapshot();
    assert_eq!(c.previous(now), ignored(IgnoreReason::AtStart));
    assert_eq!(c.snapshot(), before);
    assert_eq!(c.surface().paints, 1);
}

#[test]
fn navigation_dropped_while_settling() {
    let t0 = Instant::now();
    let mut c = carousel(6, 1200.0);

    assert!(c.next(t0).moved());
    let during = t0 + Duration::from_millis(599);
    assert_eq!(c.next(during), ignored(IgnoreReason::Animating));
    assert_eq!(c.previous(during), ignored(IgnoreReason::Animating));
    assert_eq!(c.go_to_slide(0, during), ignored(IgnoreReason::Animating));
    assert_eq!(c.current_slide(), 1);

    // Dropped, not queued: nothing replays once the lock lifts.
    let after = t0 + SETTLE;
    c.poll_timers(after);
    assert_eq!(c.current_slide(), 1);
    assert!(c.next(after).moved());
    assert_eq!(c.current_slide(), 2);
}

#[test]
fn fewer_cards_than_window_cannot_navigate() {
    let now = Instant::now();
    let mut c = carousel(2, 1200.0);
    assert_eq!(c.next(now), ignored(IgnoreReason::NothingToNavigate));
    assert_eq!(c.go_to_slide(1, now), ignored(IgnoreReason::NothingToNavigate));
    assert!(!c.is_animating());
    assert!(!c.surface().prev_enabled);
    assert!(!c.surface().next_enabled);
    assert_page_consistent(&c);
}

#[test]
fn zero_cards_disables_everything() {
    let now = Instant::now();
    let mut c = carousel(0, 500.0);
    assert!(c.is_initialized());
    assert!(c.surface().indicators.is_empty());
    assert!(!c.surface().prev_enabled);
    assert!(!c.surface().next_enabled);
    assert_eq!(c.next(now), ignored(IgnoreReason::NothingToNavigate));
    assert_eq!(c.previous(now), ignored(IgnoreReason::NothingToNavigate));
    assert_page_consistent(&c);
}

#[test]
fn swipe_threshold() {
    let t0 = Instant::now();
    let mut c = carousel(6, 500.0);

    c.touch_start(200.0);
    assert_eq!(c.touch_end(160.0, t0), None);
    assert_eq!(c.current_slide(), 0);

    c.touch_start(200.0);
    assert_eq!(
        c.touch_end(140.0, t0),
        Some(Navigation::Moved { from: 0, to: 1 })
    );

    let later = t0 + SETTLE;
    c.touch_start(100.0);
    assert_eq!(
        c.touch_end(180.0, later),
        Some(Navigation::Moved { from: 1, to: 0 })
    );
}

#[test]
fn arrow_keys_route_to_steps() {
    let t0 = Instant::now();
    let mut c = carousel(6, 900.0);
    assert_eq!(c.visible_cards(), 2);

    let right = CarouselInput::Key {
        key: Key::ArrowRight,
    };
    let left = CarouselInput::Key {
        key: Key::ArrowLeft,
    };
    assert_eq!(
        c.dispatch(&right, t0),
        Some(Navigation::Moved { from: 0, to: 1 })
    );
    assert_eq!(
        c.dispatch(&left, t0 + Duration::from_millis(10)),
        Some(ignored(IgnoreReason::Animating))
    );
    assert_eq!(
        c.dispatch(&left, t0 + SETTLE),
        Some(Navigation::Moved { from: 1, to: 0 })
    );
}

#[test]
fn resize_burst_reflows_once_with_last_width() {
    let t0 = Instant::now();
    let ms = Duration::from_millis;
    let mut c = carousel(6, 1200.0);
    c.go_to_slide(3, t0);
    let paints = c.surface().paints;

    c.handle_resize(900.0, t0 + ms(700));
    c.handle_resize(600.0, t0 + ms(800));
    c.poll_timers(t0 + ms(999));
    assert_eq!(c.visible_cards(), 3);
    assert_eq!(c.surface().paints, paints);

    c.poll_timers(t0 + ms(1000));
    assert_eq!(c.visible_cards(), 1);
    assert_eq!(c.current_slide(), 3);
    assert_eq!(c.surface().paints, paints + 1);
    assert_page_consistent(&c);
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn resize_to_mobile_keeps_last_card_reachable() {
    let mut now = Instant::now();
    let mut c = carousel(6, 600.0);
    c.go_to_slide(5, now);
    assert_eq!(c.current_slide(), 5);
    now += SETTLE;

    c.handle_resize(700.0, now);
    c.poll_timers(now + Duration::from_millis(200));
    assert_eq!(c.visible_cards(), 1);
    assert_eq!(c.current_slide(), 5.min(6 - 1));
}

#[test]
fn resize_to_wider_layout_reclamps() {
    let now = Instant::now();
    let mut c = carousel(6, 600.0);
    c.go_to_slide(5, now);

    c.handle_resize(1400.0, now);
    c.poll_timers(now + Duration::from_millis(200));
    assert_eq!(c.visible_cards(), 3);
    assert_eq!(c.current_slide(), 3);
    assert!(!c.surface().next_enabled);
    assert_page_consistent(&c);
}

#[test]
fn random_sequences_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(0x5eed_ca70);
    let widths = [480.0, 800.0, 1300.0];

    for total in 0..10usize {
        let mut now = Instant::now();
        let mut c = carousel(total, widths[total % widths.len()]);
        for _ in 0..200 {
            now += Duration::from_millis(rng.random_range(0..900));
            let input = match rng.random_range(0..5) {
                0 => CarouselInput::Next,
                1 => CarouselInput::Previous,
                2 => CarouselInput::GoTo {
                    index: rng.random_range(0..12),
                },
                3 => CarouselInput::Resize {
                    viewport_width: widths[rng.random_range(0..widths.len())],
                },
                _ => CarouselInput::Key {
                    key: if rng.random_bool(0.5) {
                        Key::ArrowLeft
                    } else {
                        Key::ArrowRight
                    },
                },
            };
            c.dispatch(&input, now);

            let max = total.saturating_sub(c.visible_cards());
            assert!(c.current_slide() <= max, "total={total} input={input:?}");
            assert_page_consistent(&c);
        }
    }
}

#[test]
fn instances_are_independent() {
    let now = Instant::now();
    let mut a = carousel(6, 1200.0);
    let mut b = carousel(6, 1200.0);
    a.next(now);
    assert_eq!(a.current_slide(), 1);
    assert_eq!(b.current_slide(), 0);
    assert!(!b.is_animating());
    assert!(b.next(now).moved());
}
