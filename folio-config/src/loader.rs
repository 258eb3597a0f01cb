use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

use folio_carousel::{Breakpoints, CarouselConfig};

use super::{
    sources::{EnvConfig, FileConfig, parse_duration},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![PathBuf::from("folio.toml"), PathBuf::from("config/folio.toml")]
});

const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// Where the effective configuration came from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CarouselConfig,
    pub metadata: ConfigMetadata,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_with_vars(std::env::vars())
    }

    /// Load with an explicit set of process variables. Values from the env
    /// file only fill keys the process does not already define.
    pub fn load_with_vars<I>(
        &self,
        process_vars: I,
    ) -> Result<ConfigLoad, ConfigLoadError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let (mut vars, env_file_loaded) = self.read_env_file()?;
        vars.extend(process_vars);
        let env = EnvConfig::from_vars(&vars)?;

        let (file_config, config_path) = self.load_file_config(&env)?;

        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No folio.toml detected; using defaults and FOLIO_* \
                 environment variables",
                "Pass --config or set FOLIO_CONFIG_PATH to tune the carousel",
            );
        }

        let config = compose_config(file_config.unwrap_or_default(), env)?;
        warnings.extend(validation::apply_guard_rails(&config)?);

        debug!(
            config_path = ?config_path,
            env_file_loaded,
            "carousel configuration loaded"
        );

        Ok(ConfigLoad {
            config,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
            warnings,
        })
    }

    fn read_env_file(
        &self,
    ) -> Result<(HashMap<String, String>, bool), ConfigLoadError> {
        let path = self
            .options
            .env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(_)) => return Ok((HashMap::new(), false)),
            Err(err) => return Err(err.into()),
        };

        let mut vars = HashMap::new();
        for entry in iter {
            let (key, value) = entry?;
            vars.insert(key, value);
        }
        Ok((vars, true))
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = if let Some(path) = &self.options.config_path {
            (Some(path.clone()), true)
        } else if let Some(path) = &env.config_path {
            (Some(path.clone()), true)
        } else {
            let found = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
            (found, false)
        };

        let Some(path) = path else {
            return Ok((None, None));
        };
        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Layer environment overrides over file values over defaults.
fn compose_config(
    file: FileConfig,
    env: EnvConfig,
) -> Result<CarouselConfig, ConfigLoadError> {
    let defaults = CarouselConfig::default();
    let file = file.carousel;

    let file_duration = |key: &str, raw: Option<String>| {
        raw.map(|value| parse_duration(key, &value)).transpose()
    };

    let transition_duration = match env.transition_duration {
        Some(d) => d,
        None => file_duration(
            "carousel.transition_duration",
            file.transition_duration,
        )?
        .unwrap_or(defaults.transition_duration),
    };
    let transition_end_grace = match env.transition_end_grace {
        Some(d) => d,
        None => file_duration(
            "carousel.transition_end_grace",
            file.transition_end_grace,
        )?
        .unwrap_or(defaults.transition_end_grace),
    };
    let resize_debounce = match env.resize_debounce {
        Some(d) => d,
        None => file_duration("carousel.resize_debounce", file.resize_debounce)?
            .unwrap_or(defaults.resize_debounce),
    };

    Ok(CarouselConfig {
        breakpoints: Breakpoints {
            mobile_max_width: env
                .mobile_max_width
                .or(file.mobile_max_width)
                .unwrap_or(defaults.breakpoints.mobile_max_width),
            tablet_max_width: env
                .tablet_max_width
                .or(file.tablet_max_width)
                .unwrap_or(defaults.breakpoints.tablet_max_width),
        },
        transition_duration,
        lock_release: env
            .lock_release
            .or(file.lock_release)
            .unwrap_or(defaults.lock_release),
        transition_end_grace,
        resize_debounce,
        swipe_threshold_px: env
            .swipe_threshold_px
            .or(file.swipe_threshold_px)
            .unwrap_or(defaults.swipe_threshold_px),
    })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
