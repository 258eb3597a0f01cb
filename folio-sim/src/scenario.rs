//! Scripted input scenarios

use std::path::Path;
use std::time::Duration;

use folio_carousel::{CarouselInput, SurfaceElements};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario")]
    Parse(#[from] toml::de::Error),
    #[error("step {index} at {at_ms}ms is earlier than the step before it")]
    OutOfOrder { index: usize, at_ms: u64 },
}

/// Page geometry plus a timeline of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub cards: usize,
    #[serde(default = "default_card_width")]
    pub card_width: f32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default)]
    pub elements: SurfaceElements,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub at_ms: u64,
    pub input: CarouselInput,
}

impl Step {
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

fn default_card_width() -> f32 {
    320.0
}

fn default_viewport_width() -> f32 {
    1200.0
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            ScenarioError::Io {
                path: path.display().to_string(),
                source,
            }
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(raw)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(ScenarioError::OutOfOrder {
                    index: index + 1,
                    at_ms: pair[1].at_ms,
                });
            }
        }
        Ok(())
    }

    /// Six cards on a desktop viewport, stepped past the last window.
    pub fn walk() -> Self {
        let mut steps = vec![Step {
            at_ms: 0,
            input: CarouselInput::Initialize,
        }];
        steps.extend((0..4u64).map(|i| Step {
            at_ms: 100 + i * 700,
            input: CarouselInput::Next,
        }));
        Self {
            cards: 6,
            card_width: default_card_width(),
            viewport_width: default_viewport_width(),
            elements: SurfaceElements::complete(),
            steps,
        }
    }
}
