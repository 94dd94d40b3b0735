//! Estimator input validation errors.

use super::error_code::{self, TaludErrorCode};

/// Errors raised when estimation inputs fall outside the supported range.
///
/// A coefficient of variation of zero would collapse the strength support
/// to a point; it is rejected here instead of silently producing a
/// degenerate distribution.
#[derive(Debug, thiserror::Error)]
pub enum ParameterError {
    #[error("coefficient of variation must be positive, got {cov}")]
    NonPositiveCov { cov: f64 },

    #[error("mean strength must be positive, got {mean} kPa")]
    NonPositiveMean { mean: f64 },

    #[error("sample count must be positive")]
    ZeroSampleCount,

    #[error("geometry constant {name} must be positive, got {value}")]
    NonPositiveGeometry { name: &'static str, value: f64 },

    #[error("Beta distribution rejected shape parameters: {message}")]
    DistributionBuild { message: String },
}

impl TaludErrorCode for ParameterError {
    fn error_code(&self) -> &'static str {
        error_code::PARAMETER_ERROR
    }
}
