//! # Navigator Settings
//!
//! Serializable configuration for a [`Navigator`](super::Navigator), loadable from JSON.

use crate::config::{DEFAULT_CHUNK_SIZE, DEFAULT_STEP_DISTANCE};
use crate::search::SearchConfig;
use crate::{GridwalkError, GridwalkResult};
use serde::{Deserialize, Serialize};

/// Configuration for one agent's navigation.
///
/// Missing fields take their default values when deserialized.
///
/// # Examples
///
/// ```
/// use gridwalk::NavigatorConfig;
///
/// let config = NavigatorConfig::from_json_str(r#"{ "step_distance": 0.05 }"#).unwrap();
/// assert_eq!(config.step_distance, 0.05);
/// assert!(config.corner_smoothing);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Distance moved per tick
    pub step_distance: f32,
    /// Blend toward the waypoint after the current one
    pub corner_smoothing: bool,
    /// Chunk edge length used for debug overlays
    pub chunk_size: i32,
    /// Route search settings
    pub search: SearchConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            step_distance: DEFAULT_STEP_DISTANCE,
            corner_smoothing: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
            search: SearchConfig::default(),
        }
    }
}

impl NavigatorConfig {
    /// Creates a configuration for tests with a small search cap.
    pub fn for_testing() -> Self {
        Self {
            search: SearchConfig::for_testing(),
            ..Self::default()
        }
    }

    /// Sets the per-tick step distance.
    pub fn with_step_distance(mut self, step_distance: f32) -> Self {
        self.step_distance = step_distance;
        self
    }

    /// Checks that all values are usable.
    pub fn validate(&self) -> GridwalkResult<()> {
        if !self.step_distance.is_finite() || self.step_distance <= 0.0 {
            return Err(GridwalkError::InvalidConfig(format!(
                "step_distance must be a positive number, got {}",
                self.step_distance
            )));
        }
        if self.chunk_size <= 0 {
            return Err(GridwalkError::InvalidConfig(format!(
                "chunk_size must be positive, got {}",
                self.chunk_size
            )));
        }
        self.search.validate()
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> GridwalkResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<std::path::Path>) -> GridwalkResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> GridwalkResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
