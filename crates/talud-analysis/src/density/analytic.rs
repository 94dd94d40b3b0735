//! Closed-form Beta density curve.

use super::{DensityEstimator, FrequencyScale};
use crate::distribution::StrengthDistribution;

/// Analytic density of the bounded Beta strength model, frequency-scaled.
pub struct AnalyticBetaDensity {
    distribution: StrengthDistribution,
    scale: FrequencyScale,
}

impl AnalyticBetaDensity {
    pub fn new(distribution: StrengthDistribution, scale: FrequencyScale) -> Self {
        Self {
            distribution,
            scale,
        }
    }
}

impl DensityEstimator for AnalyticBetaDensity {
    fn density_at(&self, x: f64) -> f64 {
        self.distribution.pdf(x) * self.scale.factor()
    }
}
