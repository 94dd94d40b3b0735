//! Bounded PERT/Beta model of the strength parameter.
//!
//! The support spans six standard deviations centered on the mean. Shape
//! exponents come either from the mode position (PERT) or are fixed
//! symmetric; with the mode at the mean both PERT exponents evaluate to 3.

use rand::distributions::Distribution as _;
use rand::Rng;
use statrs::distribution::{Beta, Continuous};

use talud_core::errors::ParameterError;

use crate::types::ShapeMode;

/// Number of standard deviations spanned by the bounded support.
const SUPPORT_SIGMA_SPAN: f64 = 6.0;

/// Shape exponent used by the fixed symmetric variant.
const SYMMETRIC_SHAPE: f64 = 4.0;

/// A Beta-family distribution rescaled to a bounded strength support.
#[derive(Debug, Clone)]
pub struct StrengthDistribution {
    mean: f64,
    lower: f64,
    width: f64,
    shape_alpha: f64,
    shape_beta: f64,
    beta: Beta,
}

impl StrengthDistribution {
    /// Build from mean and coefficient of variation with the given shape mode.
    pub fn new(mean: f64, cov: f64, mode: ShapeMode) -> Result<Self, ParameterError> {
        match mode {
            ShapeMode::Pert => Self::pert(mean, cov),
            ShapeMode::Symmetric => Self::symmetric(mean, cov),
        }
    }

    /// PERT variant: exponents derived from the mode position within the
    /// support, with the mode placed at the mean.
    pub fn pert(mean: f64, cov: f64) -> Result<Self, ParameterError> {
        let (lower, width) = support(mean, cov)?;
        let upper = lower + width;
        let mode = mean;
        let shape_alpha = 1.0 + 4.0 * (mode - lower) / width;
        let shape_beta = 1.0 + 4.0 * (upper - mode) / width;
        Self::build(mean, lower, width, shape_alpha, shape_beta)
    }

    /// Symmetric variant: fixed α = β = 4.
    pub fn symmetric(mean: f64, cov: f64) -> Result<Self, ParameterError> {
        let (lower, width) = support(mean, cov)?;
        Self::build(mean, lower, width, SYMMETRIC_SHAPE, SYMMETRIC_SHAPE)
    }

    fn build(
        mean: f64,
        lower: f64,
        width: f64,
        shape_alpha: f64,
        shape_beta: f64,
    ) -> Result<Self, ParameterError> {
        let beta = Beta::new(shape_alpha, shape_beta).map_err(|e| {
            ParameterError::DistributionBuild {
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            mean,
            lower,
            width,
            shape_alpha,
            shape_beta,
            beta,
        })
    }

    /// Nominal mean of the strength parameter, in kPa.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Lower and upper bounds of the support, in kPa.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.lower + self.width)
    }

    /// Width of the support, in kPa.
    pub fn support_width(&self) -> f64 {
        self.width
    }

    /// Shape exponents `(α, β)`.
    pub fn shape(&self) -> (f64, f64) {
        (self.shape_alpha, self.shape_beta)
    }

    /// Density at `x`, rescaled from the unit interval to the support.
    ///
    /// Returns 0.0 outside the support and guards non-finite values at
    /// the edges (the unit Beta pdf diverges there for exponents < 1).
    pub fn pdf(&self, x: f64) -> f64 {
        let u = (x - self.lower) / self.width;
        if !(0.0..=1.0).contains(&u) {
            return 0.0;
        }
        let density = self.beta.pdf(u) / self.width;
        if density.is_finite() {
            density
        } else {
            0.0
        }
    }

    /// Draw `count` independent samples, rescaled to the support.
    pub fn sample_into<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<f64> {
        (0..count)
            .map(|_| self.lower + self.width * self.beta.sample(rng))
            .collect()
    }
}

/// Support derivation: σ = cov · mean, width = 6σ, centered on the mean.
fn support(mean: f64, cov: f64) -> Result<(f64, f64), ParameterError> {
    if mean <= 0.0 || !mean.is_finite() {
        return Err(ParameterError::NonPositiveMean { mean });
    }
    if cov <= 0.0 || !cov.is_finite() {
        return Err(ParameterError::NonPositiveCov { cov });
    }
    let std_dev = cov * mean;
    let width = SUPPORT_SIGMA_SPAN * std_dev;
    Ok((mean - width / 2.0, width))
}
