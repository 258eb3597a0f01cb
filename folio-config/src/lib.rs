//! Configuration loading for Folio carousels.
//!
//! Resolves a [`folio_carousel::CarouselConfig`] from compiled defaults, an
//! optional `folio.toml` and `FOLIO_*` environment variables (with `.env`
//! support), then runs guard rails that reject unusable tuning and collect
//! non-fatal warnings.

pub mod loader;
pub mod sources;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    ConfigMetadata,
};
pub use sources::{EnvConfig, FileCarouselConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
