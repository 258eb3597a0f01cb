use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use folio_carousel::LockRelease;

use crate::loader::ConfigLoadError;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub carousel: FileCarouselConfig,
}

/// `[carousel]` table. Durations are human-readable (`"600ms"`, `"1s"`).
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_max_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet_max_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_release: Option<LockRelease>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_end_grace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_debounce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_threshold_px: Option<f32>,
}

pub const ENV_CONFIG_PATH: &str = "FOLIO_CONFIG_PATH";
pub const ENV_MOBILE_MAX_WIDTH: &str = "FOLIO_MOBILE_MAX_WIDTH";
pub const ENV_TABLET_MAX_WIDTH: &str = "FOLIO_TABLET_MAX_WIDTH";
pub const ENV_TRANSITION_DURATION: &str = "FOLIO_TRANSITION_DURATION";
pub const ENV_LOCK_RELEASE: &str = "FOLIO_LOCK_RELEASE";
pub const ENV_TRANSITION_END_GRACE: &str = "FOLIO_TRANSITION_END_GRACE";
pub const ENV_RESIZE_DEBOUNCE: &str = "FOLIO_RESIZE_DEBOUNCE";
pub const ENV_SWIPE_THRESHOLD_PX: &str = "FOLIO_SWIPE_THRESHOLD_PX";

/// Overrides gathered from `FOLIO_*` environment variables.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub mobile_max_width: Option<f32>,
    pub tablet_max_width: Option<f32>,
    pub transition_duration: Option<Duration>,
    pub lock_release: Option<LockRelease>,
    pub transition_end_grace: Option<Duration>,
    pub resize_debounce: Option<Duration>,
    pub swipe_threshold_px: Option<f32>,
}

impl EnvConfig {
    pub fn from_vars(
        vars: &HashMap<String, String>,
    ) -> Result<Self, ConfigLoadError> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            config_path: get(ENV_CONFIG_PATH).map(PathBuf::from),
            mobile_max_width: parse_var(
                ENV_MOBILE_MAX_WIDTH,
                get(ENV_MOBILE_MAX_WIDTH),
            )?,
            tablet_max_width: parse_var(
                ENV_TABLET_MAX_WIDTH,
                get(ENV_TABLET_MAX_WIDTH),
            )?,
            transition_duration: duration_var(
                ENV_TRANSITION_DURATION,
                get(ENV_TRANSITION_DURATION),
            )?,
            lock_release: get(ENV_LOCK_RELEASE)
                .map(|raw| parse_lock_release(ENV_LOCK_RELEASE, raw))
                .transpose()?,
            transition_end_grace: duration_var(
                ENV_TRANSITION_END_GRACE,
                get(ENV_TRANSITION_END_GRACE),
            )?,
            resize_debounce: duration_var(
                ENV_RESIZE_DEBOUNCE,
                get(ENV_RESIZE_DEBOUNCE),
            )?,
            swipe_threshold_px: parse_var(
                ENV_SWIPE_THRESHOLD_PX,
                get(ENV_SWIPE_THRESHOLD_PX),
            )?,
        })
    }
}

fn parse_var<T>(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, ConfigLoadError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|value| {
        value.parse::<T>().map_err(|err| ConfigLoadError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: err.to_string(),
        })
    })
    .transpose()
}

fn duration_var(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<Duration>, ConfigLoadError> {
    raw.map(|value| parse_duration(key, value)).transpose()
}

/// Parse a human-readable duration, attributing failures to `key`.
pub fn parse_duration(
    key: &str,
    value: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(value).map_err(|err| {
        ConfigLoadError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: err.to_string(),
        }
    })
}

fn parse_lock_release(
    key: &str,
    value: &str,
) -> Result<LockRelease, ConfigLoadError> {
    match value.to_ascii_lowercase().replace('-', "_").as_str() {
        "timer" => Ok(LockRelease::Timer),
        "transition_end" => Ok(LockRelease::TransitionEnd),
        _ => Err(ConfigLoadError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected `timer` or `transition_end`".into(),
        }),
    }
}
