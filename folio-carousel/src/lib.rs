//! Card carousel controller for the Folio portfolio page.
//!
//! The crate models the services carousel as an explicit state machine bound
//! to a host [`CarouselSurface`]: a clamped current index, a visible window
//! sized by viewport breakpoints, and an animation lock that drops (never
//! queues) navigation while a transition settles. Inputs from indicator
//! clicks, prev/next buttons, arrow keys, touch swipes and window resizes all
//! funnel through the same guarded transition.
//!
//! Time is explicit: timed operations take a `now` instant and pending
//! timers fire in [`Carousel::poll_timers`]. [`spawn_carousel`] runs a
//! controller on a tokio task that wakes for inputs and deadlines.

pub mod breakpoints;
pub mod config;
pub mod constants;
pub mod controller;
pub mod debounce;
pub mod driver;
pub mod error;
pub mod frame;
pub mod headless;
pub mod input;
pub mod lock;
pub mod state;
pub mod surface;
pub mod swipe;
pub mod transition;

pub use breakpoints::{Breakpoints, visible_cards_for_width};
pub use config::CarouselConfig;
pub use controller::{Carousel, CarouselSnapshot};
pub use driver::{CarouselHandle, spawn_carousel};
pub use error::CarouselError;
pub use frame::Frame;
pub use headless::HeadlessPage;
pub use input::{CarouselInput, IgnoreReason, Key, Navigation};
pub use lock::LockRelease;
pub use state::CarouselState;
pub use surface::{CarouselSurface, NavButton, SurfaceElements};
pub use swipe::SwipeDirection;
pub use transition::{CubicBezier, MoveKind, Transition};
