//! Top-level talud configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GeometryConfig, SimulationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Project config (`talud.toml` in project root)
/// 2. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaludConfig {
    pub geometry: GeometryConfig,
    pub simulation: SimulationConfig,
}

impl TaludConfig {
    /// Load configuration from `talud.toml` in `root`, falling back to
    /// compiled defaults when the file does not exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("talud.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let config: TaludConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        tracing::debug!(path = %path.display(), "loaded project config");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TaludConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TaludConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("geometry.slope_height_m", config.geometry.slope_height_m),
            ("geometry.unit_weight_kn_m3", config.geometry.unit_weight_kn_m3),
            ("geometry.stability_number", config.geometry.stability_number),
        ] {
            if let Some(v) = value {
                if v <= 0.0 || !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a positive finite number".to_string(),
                    });
                }
            }
        }

        if let Some(count) = config.simulation.sample_count {
            if count == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.sample_count".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        for (field, value) in [
            (
                "simulation.strength_bin_width",
                config.simulation.strength_bin_width,
            ),
            (
                "simulation.safety_factor_bin_width",
                config.simulation.safety_factor_bin_width,
            ),
        ] {
            if let Some(v) = value {
                if v <= 0.0 || !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a positive finite number".to_string(),
                    });
                }
            }
        }

        let (lo, hi) = config.simulation.effective_safety_factor_curve_range();
        if lo >= hi {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.safety_factor_curve_min".to_string(),
                message: "curve range must be non-empty".to_string(),
            });
        }

        Ok(())
    }
}
