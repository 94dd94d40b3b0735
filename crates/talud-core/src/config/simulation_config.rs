//! Monte Carlo simulation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the simulation subsystem.
///
/// Defaults match the reference figures: 10,000 draws, 2.0 kPa strength
/// bins, 0.05 safety-factor bins, and a safety-factor curve over
/// [0.01, 3.0].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of Monte Carlo draws per estimation. Default: 10_000.
    pub sample_count: Option<usize>,
    /// Seed for reproducible runs. Unset means entropy-seeded.
    pub seed: Option<u64>,
    /// Histogram bin width for the strength axis, in kPa. Default: 2.0.
    pub strength_bin_width: Option<f64>,
    /// Histogram bin width for the safety-factor axis. Default: 0.05.
    pub safety_factor_bin_width: Option<f64>,
    /// Points on the strength density curve. Default: 200.
    pub strength_curve_points: Option<usize>,
    /// Points on the safety-factor density curve. Default: 500.
    pub safety_factor_curve_points: Option<usize>,
    /// Lower edge of the safety-factor curve. Default: 0.01.
    pub safety_factor_curve_min: Option<f64>,
    /// Upper edge of the safety-factor curve. Default: 3.0.
    pub safety_factor_curve_max: Option<f64>,
}

impl SimulationConfig {
    /// Returns the effective sample count, defaulting to 10,000.
    pub fn effective_sample_count(&self) -> usize {
        self.sample_count.unwrap_or(10_000)
    }

    /// Returns the effective strength bin width, defaulting to 2.0 kPa.
    pub fn effective_strength_bin_width(&self) -> f64 {
        self.strength_bin_width.unwrap_or(2.0)
    }

    /// Returns the effective safety-factor bin width, defaulting to 0.05.
    pub fn effective_safety_factor_bin_width(&self) -> f64 {
        self.safety_factor_bin_width.unwrap_or(0.05)
    }

    /// Returns the effective strength curve resolution, defaulting to 200.
    pub fn effective_strength_curve_points(&self) -> usize {
        self.strength_curve_points.unwrap_or(200)
    }

    /// Returns the effective safety-factor curve resolution, defaulting to 500.
    pub fn effective_safety_factor_curve_points(&self) -> usize {
        self.safety_factor_curve_points.unwrap_or(500)
    }

    /// Returns the effective safety-factor curve range, defaulting to [0.01, 3.0].
    pub fn effective_safety_factor_curve_range(&self) -> (f64, f64) {
        (
            self.safety_factor_curve_min.unwrap_or(0.01),
            self.safety_factor_curve_max.unwrap_or(3.0),
        )
    }
}
