//! Slope geometry configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the slope geometry and stability model.
///
/// The three constants define the resisting capacity `Ns * γ * H` that
/// every simulated strength value is measured against.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeometryConfig {
    /// Slope height in meters. Default: 15.0.
    pub slope_height_m: Option<f64>,
    /// Soil unit weight in kN/m³. Default: 19.0.
    pub unit_weight_kn_m3: Option<f64>,
    /// Taylor stability number for the failure mechanism. Default: 0.181.
    pub stability_number: Option<f64>,
}

impl GeometryConfig {
    /// Returns the effective slope height, defaulting to 15.0 m.
    pub fn effective_slope_height_m(&self) -> f64 {
        self.slope_height_m.unwrap_or(15.0)
    }

    /// Returns the effective unit weight, defaulting to 19.0 kN/m³.
    pub fn effective_unit_weight_kn_m3(&self) -> f64 {
        self.unit_weight_kn_m3.unwrap_or(19.0)
    }

    /// Returns the effective stability number, defaulting to 0.181.
    pub fn effective_stability_number(&self) -> f64 {
        self.stability_number.unwrap_or(0.181)
    }
}
