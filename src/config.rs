//! Configuration loading for the path planner.

use serde::Deserialize;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::tank::TankBounds;

/// Planner configuration: tank geometry plus search granularity.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PlannerConfig {
    /// Tank boundary geometry
    #[serde(default)]
    pub tank: TankBounds,

    /// Fine-path step magnitude in metres (default: 0.001)
    ///
    /// Smaller steps validate more intermediate positions at the cost of
    /// iteration count; steps larger than the thinnest obstacle can tunnel
    /// straight through it.
    #[serde(default = "default_step_size")]
    pub step_size: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tank: TankBounds::default(),
            step_size: default_step_size(),
        }
    }
}

fn default_step_size() -> f64 {
    0.001
}

impl PlannerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::Config(format!("failed to read config file: {}", e)))?;
        let config: PlannerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that TOML parsing cannot express.
    ///
    /// A zero step would make the fine-path step count unbounded and a
    /// negative one would empty the validation sweep, so neither may
    /// reach the planner.
    pub fn validate(&self) -> Result<()> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(PlannerError::Config(format!(
                "step_size must be finite and positive, got {}",
                self.step_size
            )));
        }
        Ok(())
    }
}
