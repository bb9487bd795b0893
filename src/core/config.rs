/// Generator configuration — defaults, floor height, and input limits,
/// loadable from RON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Values used when a prompt does not mention a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub floors: u32,
    pub width: u32,
    pub depth: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            floors: 5,
            width: 10,
            depth: 10,
        }
    }
}

/// Upper bounds on extracted dimensions. Generators unroll every window
/// and battlement, so these bound the size of a single script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_floors: u32,
    pub max_width: u32,
    pub max_depth: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_floors: 200,
            max_width: 500,
            max_depth: 500,
        }
    }
}

/// Top-level configuration for a [`ScriptEngine`](crate::core::pipeline::ScriptEngine).
///
/// RON form, every field optional:
/// ```ron
/// (
///     defaults: (floors: 5, width: 10, depth: 10),
///     floor_height: 3.0,
///     limits: (max_floors: 200, max_width: 500, max_depth: 500),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub defaults: Defaults,
    pub floor_height: f64,
    pub limits: Limits,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            floor_height: 3.0,
            limits: Limits::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse and validate a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<GeneratorConfig, ConfigError> {
        let config: GeneratorConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Every default must be positive and within its limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.floor_height.is_finite() && self.floor_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "floor_height must be positive, got {}",
                self.floor_height
            )));
        }
        let checks = [
            ("floors", self.defaults.floors, self.limits.max_floors),
            ("width", self.defaults.width, self.limits.max_width),
            ("depth", self.defaults.depth, self.limits.max_depth),
        ];
        for (field, default, max) in checks {
            if default == 0 {
                return Err(ConfigError::Invalid(format!(
                    "default {field} must be at least 1"
                )));
            }
            if default > max {
                return Err(ConfigError::Invalid(format!(
                    "default {field} {default} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }
}
