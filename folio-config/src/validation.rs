use folio_carousel::{CarouselConfig, LockRelease};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("breakpoint {field} must be a positive, finite width (got {value})")]
    InvalidBreakpoint { field: &'static str, value: f32 },
    #[error(
        "mobile_max_width ({mobile}) must be smaller than tablet_max_width ({tablet})"
    )]
    UnorderedBreakpoints { mobile: f32, tablet: f32 },
    #[error("transition_duration must be greater than zero")]
    ZeroTransition,
    #[error("swipe_threshold_px must be a finite, non-negative distance (got {0})")]
    InvalidSwipeThreshold(f32),
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &CarouselConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let bp = config.breakpoints;

    for (field, value) in [
        ("mobile_max_width", bp.mobile_max_width),
        ("tablet_max_width", bp.tablet_max_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigGuardRailError::InvalidBreakpoint { field, value });
        }
    }
    if bp.mobile_max_width >= bp.tablet_max_width {
        return Err(ConfigGuardRailError::UnorderedBreakpoints {
            mobile: bp.mobile_max_width,
            tablet: bp.tablet_max_width,
        });
    }

    if config.transition_duration.is_zero() {
        return Err(ConfigGuardRailError::ZeroTransition);
    }

    let threshold = config.swipe_threshold_px;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigGuardRailError::InvalidSwipeThreshold(threshold));
    }
    if threshold == 0.0 {
        warnings.push_with_hint(
            "swipe_threshold_px is 0; any horizontal touch movement will navigate",
            "A threshold around 50px keeps taps from turning into swipes",
        );
    }

    if config.resize_debounce > config.transition_duration {
        warnings.push_with_hint(
            format!(
                "resize_debounce ({}) is longer than transition_duration ({})",
                humantime::format_duration(config.resize_debounce),
                humantime::format_duration(config.transition_duration),
            ),
            "Layout changes will lag visibly behind window resizes",
        );
    }

    if config.lock_release == LockRelease::Timer
        && config.transition_end_grace
            != CarouselConfig::default().transition_end_grace
    {
        warnings.push(
            "transition_end_grace only applies when lock_release = \"transition_end\"",
        );
    }

    Ok(warnings)
}
