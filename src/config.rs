//! Configuration loading
//!
//! Settings come from an optional TOML file. Every key has a default, so an
//! empty file and no file at all behave the same.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::calculator::wiggle_room;
use crate::error::{FrameError, Result};
use crate::types::Measurement;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    pub calculation: CalculationSettings,
}

/// Knobs for the dimension calculator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculationSettings {
    /// Clearance added to each side of the art, written like any other measurement
    pub wiggle_room: Measurement,
    /// Treat a zero or negative outside dimension as an error instead of showing it
    pub reject_non_positive: bool,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            wiggle_room: wiggle_room(),
            reject_non_positive: false,
        }
    }
}

impl FrameConfig {
    /// Load configuration from `path`, or fall back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path).map_err(|e| FrameError::Config {
            message: format!("failed to read {}: {e}", path.display()),
        })?;

        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| FrameError::Config {
            message: e.to_string(),
        })?;

        let wiggle_room = &config.calculation.wiggle_room;
        if wiggle_room.is_negative() {
            return Err(FrameError::Config {
                message: format!("wiggle_room must not be negative, got {wiggle_room}"),
            });
        }

        Ok(config)
    }
}
