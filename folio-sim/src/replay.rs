//! Scenario replay on a virtual clock or through the tokio driver

use folio_carousel::{
    Carousel, CarouselConfig, CarouselInput, CarouselSnapshot, HeadlessPage,
    Navigation, spawn_carousel,
};
use serde::Serialize;
use tokio::time::{Instant, sleep_until};
use tracing::info;

use crate::scenario::Scenario;

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub at_ms: u64,
    pub input: CarouselInput,
    /// Only known on the virtual clock; the driver does not report outcomes.
    pub outcome: Option<Navigation>,
    pub snapshot: CarouselSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepReport>,
    pub final_snapshot: CarouselSnapshot,
    pub page: HeadlessPage,
}

fn page_for(scenario: &Scenario) -> HeadlessPage {
    HeadlessPage::new(
        scenario.cards,
        scenario.card_width,
        scenario.viewport_width,
    )
    .with_elements(scenario.elements)
}

/// Replay instantly: timers fire at their exact deadlines between steps.
pub fn replay_virtual(
    scenario: &Scenario,
    config: CarouselConfig,
) -> ReplayReport {
    let origin = Instant::now();
    let mut carousel = Carousel::new(page_for(scenario), config);
    let mut steps = Vec::with_capacity(scenario.steps.len());

    for step in &scenario.steps {
        let now = origin + step.at();
        drain_timers(&mut carousel, now);
        let outcome = carousel.dispatch(&step.input, now);
        let snapshot = carousel.snapshot();
        log_step(step.at_ms, &step.input, outcome.as_ref(), &snapshot);
        steps.push(StepReport {
            at_ms: step.at_ms,
            input: step.input.clone(),
            outcome,
            snapshot,
        });
    }

    while let Some(deadline) = carousel.next_deadline() {
        carousel.poll_timers(deadline);
    }

    ReplayReport {
        steps,
        final_snapshot: carousel.snapshot(),
        page: carousel.into_surface(),
    }
}

fn drain_timers(carousel: &mut Carousel<HeadlessPage>, until: Instant) {
    while let Some(deadline) = carousel.next_deadline() {
        if deadline > until {
            break;
        }
        carousel.poll_timers(deadline);
    }
}

/// Replay in real time through the event-loop driver.
pub async fn replay_realtime(
    scenario: &Scenario,
    config: CarouselConfig,
) -> anyhow::Result<ReplayReport> {
    let origin = Instant::now();
    let carousel = Carousel::new(page_for(scenario), config);
    let (handle, task) = spawn_carousel(carousel);
    let mut steps = Vec::with_capacity(scenario.steps.len());

    for step in &scenario.steps {
        sleep_until(origin + step.at()).await;
        handle.send(step.input.clone())?;
        let snapshot = handle.snapshot().await?;
        log_step(step.at_ms, &step.input, None, &snapshot);
        steps.push(StepReport {
            at_ms: step.at_ms,
            input: step.input.clone(),
            outcome: None,
            snapshot,
        });
    }

    sleep_until(Instant::now() + config.lock_hold().max(config.resize_debounce))
        .await;
    let final_snapshot = handle.snapshot().await?;
    drop(handle);
    let carousel = task.await?;

    Ok(ReplayReport {
        steps,
        final_snapshot,
        page: carousel.into_surface(),
    })
}

fn log_step(
    at_ms: u64,
    input: &CarouselInput,
    outcome: Option<&Navigation>,
    snapshot: &CarouselSnapshot,
) {
    info!(
        at_ms,
        ?input,
        ?outcome,
        current = snapshot.current_slide,
        visible = snapshot.visible_cards,
        animating = snapshot.is_animating,
        "step"
    );
}
