use thiserror::Error;

/// Errors surfaced by the carousel event-loop handle.
///
/// The controller itself never fails; only talking to a stopped driver does.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel event loop has shut down")]
    Closed,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
