//! Tokio event loop that owns a carousel
//!
//! One task owns the controller exclusively, mirroring the single-threaded
//! page event loop: inputs arrive over a channel and timer deadlines are
//! awaited with `sleep_until`, so no mutex guards the state.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, trace};

use crate::controller::{Carousel, CarouselSnapshot};
use crate::error::{CarouselError, Result};
use crate::input::{CarouselInput, Key};
use crate::surface::CarouselSurface;

#[derive(Debug)]
enum Command {
    Input(CarouselInput),
    Snapshot(oneshot::Sender<CarouselSnapshot>),
}

/// Cloneable sender side of a running carousel.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl CarouselHandle {
    pub fn send(&self, input: CarouselInput) -> Result<()> {
        self.tx
            .send(Command::Input(input))
            .map_err(|_| CarouselError::Closed)
    }

    pub fn initialize(&self) -> Result<()> {
        self.send(CarouselInput::Initialize)
    }

    pub fn next(&self) -> Result<()> {
        self.send(CarouselInput::Next)
    }

    pub fn previous(&self) -> Result<()> {
        self.send(CarouselInput::Previous)
    }

    pub fn go_to(&self, index: usize) -> Result<()> {
        self.send(CarouselInput::GoTo { index })
    }

    pub fn key(&self, key: Key) -> Result<()> {
        self.send(CarouselInput::Key { key })
    }

    pub fn resize(&self, viewport_width: f32) -> Result<()> {
        self.send(CarouselInput::Resize { viewport_width })
    }

    /// Current model state, after every input sent before this call.
    pub async fn snapshot(&self) -> Result<CarouselSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot(reply))
            .map_err(|_| CarouselError::Closed)?;
        rx.await.map_err(|_| CarouselError::Closed)
    }
}

/// Move `carousel` onto its own task. The task ends once every handle is
/// dropped and hands the controller back through the join handle.
pub fn spawn_carousel<S>(
    carousel: Carousel<S>,
) -> (CarouselHandle, JoinHandle<Carousel<S>>)
where
    S: CarouselSurface + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(carousel, rx));
    (CarouselHandle { tx }, task)
}

async fn run<S: CarouselSurface>(
    mut carousel: Carousel<S>,
    mut rx: mpsc::UnboundedReceiver<Command>,
) -> Carousel<S> {
    debug!("carousel event loop started");
    loop {
        let deadline = carousel.next_deadline();
        let wake = sleep_until(deadline.unwrap_or_else(Instant::now));
        tokio::select! {
            biased;

            _ = wake, if deadline.is_some() => {
                carousel.poll_timers(Instant::now());
            }
            command = rx.recv() => match command {
                Some(Command::Input(input)) => {
                    let outcome = carousel.dispatch(&input, Instant::now());
                    trace!(?input, ?outcome, "input handled");
                }
                Some(Command::Snapshot(reply)) => {
                    carousel.poll_timers(Instant::now());
                    let _ = reply.send(carousel.snapshot());
                }
                None => break,
            },
        }
    }
    debug!("carousel event loop stopped");
    carousel
}
