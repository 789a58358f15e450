// Planner configuration

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::error::{PlannerError, Result};
use crate::utils::loop_route::{LoopClassifier, LOOP_DISTANCE_THRESHOLD_KM};

/// Tunable settings handed to the planner at construction time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Start and end closer than this (km) make the route a loop
    pub loop_threshold_km: f64,

    /// Strategy used when a request does not choose one
    pub algorithm: Algorithm,

    /// Fall back to synthetic coordinates when a name cannot be resolved
    pub allow_synthetic_fallback: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            loop_threshold_km: LOOP_DISTANCE_THRESHOLD_KM,
            algorithm: Algorithm::default(),
            allow_synthetic_fallback: false,
        }
    }
}

impl PlannerConfig {
    /// Loads and validates a JSON configuration file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json_str = fs::read_to_string(path)?;
        let config = Self::from_json(&json_str)?;
        info!("Loaded planner configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.loop_threshold_km.is_finite() || self.loop_threshold_km <= 0.0 {
            return Err(PlannerError::config(format!(
                "loop_threshold_km must be a positive number, got {}",
                self.loop_threshold_km
            )));
        }
        Ok(())
    }

    pub fn classifier(&self) -> LoopClassifier {
        LoopClassifier::new(self.loop_threshold_km)
    }
}
