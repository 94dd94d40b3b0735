//! Scenario parameterization and paired comparison.
//!
//! A scenario carries everything one estimation needs, so the constants
//! behind each figure are explicit and auditable instead of ambient.

use serde::{Deserialize, Serialize};

use talud_core::config::TaludConfig;
use talud_core::errors::ParameterError;

use crate::simulation::StabilityEstimator;
use crate::types::{ShapeMode, SlopeGeometry, StabilityEstimate};

/// One slope-stability scenario: strength model plus geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Mean undrained shear strength, in kPa.
    pub mean_strength_kpa: f64,
    /// Coefficient of variation of the strength parameter.
    pub cov: f64,
    /// Shape-parameter selection for the bounded distribution.
    pub shape_mode: ShapeMode,
    /// Slope geometry and stability constants.
    pub geometry: SlopeGeometry,
}

impl Scenario {
    pub fn new(
        mean_strength_kpa: f64,
        cov: f64,
        shape_mode: ShapeMode,
        geometry: SlopeGeometry,
    ) -> Self {
        Self {
            mean_strength_kpa,
            cov,
            shape_mode,
            geometry,
        }
    }

    /// Build a scenario on the configured geometry.
    pub fn from_config(config: &TaludConfig, mean_strength_kpa: f64, cov: f64) -> Self {
        Self::new(
            mean_strength_kpa,
            cov,
            ShapeMode::Pert,
            SlopeGeometry::from_config(&config.geometry),
        )
    }

    /// Deterministic safety factor: mean strength / capacity.
    pub fn nominal_safety_factor(&self) -> f64 {
        self.mean_strength_kpa / self.geometry.capacity_kpa()
    }

    /// Validate strength parameters and geometry.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.mean_strength_kpa <= 0.0 || !self.mean_strength_kpa.is_finite() {
            return Err(ParameterError::NonPositiveMean {
                mean: self.mean_strength_kpa,
            });
        }
        if self.cov <= 0.0 || !self.cov.is_finite() {
            return Err(ParameterError::NonPositiveCov { cov: self.cov });
        }
        self.geometry.validate()
    }
}

/// Result of running two scenarios side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub first: StabilityEstimate,
    pub second: StabilityEstimate,
    /// `Pf(first) / Pf(second)`; `None` when the second probability is zero.
    pub probability_ratio: Option<f64>,
}

impl StabilityEstimator {
    /// Run two independent estimations in parallel and compare their
    /// failure probabilities.
    ///
    /// Estimations share no state, so the pair runs on a `rayon::join`.
    /// With a fixed seed both runs draw the same sample sequence.
    pub fn compare(
        &self,
        first: &Scenario,
        second: &Scenario,
    ) -> Result<ScenarioComparison, ParameterError> {
        let (first, second) = rayon::join(|| self.estimate(first), || self.estimate(second));
        let first = first?;
        let second = second?;

        let denominator = second.failure.probability_of_failure;
        let probability_ratio = if denominator > 0.0 {
            Some(first.failure.probability_of_failure / denominator)
        } else {
            None
        };

        Ok(ScenarioComparison {
            first,
            second,
            probability_ratio,
        })
    }
}
