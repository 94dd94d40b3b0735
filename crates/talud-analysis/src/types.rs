//! Engine types — geometry, density curves, failure statistics, estimates.

use serde::{Deserialize, Serialize};

use talud_core::config::GeometryConfig;
use talud_core::errors::ParameterError;

use crate::simulation::FAILURE_THRESHOLD;

/// Shape-parameter selection for the bounded strength distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeMode {
    /// Shape exponents derived from where the mode sits within the support.
    Pert,
    /// Fixed symmetric exponents (α = β = 4).
    Symmetric,
}

impl ShapeMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pert => "pert",
            Self::Symmetric => "symmetric",
        }
    }
}

impl std::fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Slope geometry and stability constants defining the resisting capacity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlopeGeometry {
    /// Slope height in meters.
    pub slope_height_m: f64,
    /// Soil unit weight in kN/m³.
    pub unit_weight_kn_m3: f64,
    /// Taylor stability number for the failure mechanism.
    pub stability_number: f64,
}

impl SlopeGeometry {
    pub fn new(slope_height_m: f64, unit_weight_kn_m3: f64, stability_number: f64) -> Self {
        Self {
            slope_height_m,
            unit_weight_kn_m3,
            stability_number,
        }
    }

    /// Build from configuration, applying compiled defaults for unset fields.
    pub fn from_config(config: &GeometryConfig) -> Self {
        Self {
            slope_height_m: config.effective_slope_height_m(),
            unit_weight_kn_m3: config.effective_unit_weight_kn_m3(),
            stability_number: config.effective_stability_number(),
        }
    }

    /// Resisting capacity `Ns * γ * H` in kPa.
    pub fn capacity_kpa(&self) -> f64 {
        self.stability_number * self.unit_weight_kn_m3 * self.slope_height_m
    }

    /// All three constants must be strictly positive and finite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("slope_height_m", self.slope_height_m),
            ("unit_weight_kn_m3", self.unit_weight_kn_m3),
            ("stability_number", self.stability_number),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ParameterError::NonPositiveGeometry { name, value });
            }
        }
        Ok(())
    }
}

/// A density curve scaled to overlay a frequency histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityCurve {
    /// Evaluation grid.
    pub x: Vec<f64>,
    /// Frequency-scaled density at each grid point.
    pub y: Vec<f64>,
    /// Set when the underlying sample was degenerate and the curve is a
    /// flat fallback rather than a real estimate.
    pub degenerate: bool,
}

impl DensityCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Failure statistics over the simulated safety factors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FailureStats {
    /// Fraction of simulated safety factors below 1.0.
    pub probability_of_failure: f64,
    /// Count of simulated safety factors below 1.0.
    pub failing_count: usize,
    /// Mean of the simulated safety factors.
    pub mean_safety_factor: f64,
}

impl FailureStats {
    /// Validate the invariants: probability in [0, 1], finite mean.
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.probability_of_failure)
            && self.mean_safety_factor.is_finite()
    }
}

/// Complete result of one Monte Carlo stability estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityEstimate {
    /// Strength samples drawn from the bounded distribution, in kPa.
    pub strength_samples: Vec<f64>,
    /// Frequency-scaled strength density curve across the support.
    pub strength_curve: DensityCurve,
    /// Realized mean of the strength sample, in kPa. May differ slightly
    /// from the nominal mean due to finite-sample variance.
    pub realized_mean_strength: f64,
    /// Curve height at the realized strength mean.
    pub realized_mean_strength_density: f64,
    /// Simulated safety factors (strength sample / capacity).
    pub safety_factors: Vec<f64>,
    /// Frequency-scaled kernel density curve of the safety factors.
    pub safety_factor_curve: DensityCurve,
    /// Curve height at the mean safety factor.
    pub mean_safety_factor_density: f64,
    /// Failure statistics.
    pub failure: FailureStats,
    /// Deterministic safety factor: nominal mean strength / capacity.
    pub nominal_safety_factor: f64,
    /// Support of the strength distribution (lower, upper), in kPa.
    pub strength_bounds: (f64, f64),
}

impl StabilityEstimate {
    /// Split the safety factors at the failure threshold: `(failing, stable)`.
    pub fn partition_safety_factors(&self) -> (Vec<f64>, Vec<f64>) {
        self.safety_factors
            .iter()
            .partition(|&&fs| fs < FAILURE_THRESHOLD)
    }
}
