use folio_carousel::{
    Carousel, CarouselSurface, IgnoreReason, NavButton, Navigation,
    SurfaceElements, Transition,
};
use mockall::mock;
use mockall::predicate::eq;
use tokio::time::Instant;

mock! {
    pub Page {}

    impl CarouselSurface for Page {
        fn elements(&self) -> SurfaceElements;
        fn card_count(&self) -> usize;
        fn card_width(&self) -> Option<f32>;
        fn viewport_width(&self) -> f32;
        fn viewport_resized(&mut self, width: f32);
        fn apply_transition(&mut self, transition: &Transition);
        fn translate_track(&mut self, offset_px: f32);
        fn set_card_active(&mut self, index: usize, active: bool);
        fn rebuild_indicators(&mut self, count: usize);
        fn set_indicator_active(&mut self, index: usize, active: bool);
        fn set_button_enabled(&mut self, button: NavButton, enabled: bool);
    }
}

#[test]
fn missing_track_leaves_page_untouched() {
    let mut page = MockPage::new();
    page.expect_viewport_width().return_const(1200.0_f32);
    page.expect_elements().return_const(SurfaceElements {
        track: false,
        ..SurfaceElements::complete()
    });
    page.expect_viewport_resized()
        .with(eq(600.0_f32))
        .times(1)
        .return_const(());
    // Any paint call would panic as unexpected.

    let mut carousel = Carousel::with_defaults(page);
    carousel.initialize();
    assert!(!carousel.is_initialized());

    let now = Instant::now();
    assert_eq!(
        carousel.next(now),
        Navigation::Ignored {
            reason: IgnoreReason::Uninitialized
        }
    );
    carousel.handle_resize(600.0, now);
    carousel.poll_timers(now + std::time::Duration::from_millis(200));
    assert_eq!(carousel.render(), None);
}

#[test]
fn optional_elements_are_skipped() {
    let mut page = MockPage::new();
    page.expect_viewport_width().return_const(1200.0_f32);
    page.expect_elements().return_const(SurfaceElements {
        track: true,
        indicators: false,
        prev_button: false,
        next_button: false,
    });
    page.expect_card_count().return_const(4_usize);
    page.expect_card_width().return_const(Some(250.0_f32));
    page.expect_translate_track().with(eq(0.0_f32)).times(1).return_const(());
    page.expect_translate_track().with(eq(250.0_f32)).times(1).return_const(());
    page.expect_set_card_active().times(8).return_const(());
    page.expect_apply_transition().times(1).return_const(());
    page.expect_rebuild_indicators().never();
    page.expect_set_indicator_active().never();
    page.expect_set_button_enabled().never();

    let mut carousel = Carousel::with_defaults(page);
    carousel.initialize();
    assert_eq!(
        carousel.next(Instant::now()),
        Navigation::Moved { from: 0, to: 1 }
    );
}

#[test]
fn buttons_follow_boundaries() {
    let mut page = MockPage::new();
    page.expect_viewport_width().return_const(1200.0_f32);
    page.expect_elements().return_const(SurfaceElements {
        track: true,
        indicators: false,
        prev_button: true,
        next_button: true,
    });
    page.expect_card_count().return_const(3_usize);
    page.expect_card_width().return_const(Some(300.0_f32));
    page.expect_translate_track().return_const(());
    page.expect_set_card_active()
        .withf(|_, active| *active)
        .times(3)
        .return_const(());
    page.expect_set_button_enabled()
        .with(eq(NavButton::Prev), eq(false))
        .times(1)
        .return_const(());
    page.expect_set_button_enabled()
        .with(eq(NavButton::Next), eq(false))
        .times(1)
        .return_const(());

    let mut carousel = Carousel::with_defaults(page);
    carousel.initialize();
    assert_eq!(carousel.visible_cards(), 3);
}
