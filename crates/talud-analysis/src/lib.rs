//! talud-analysis — probabilistic slope-stability engine.
//!
//! Models an undrained shear strength parameter as a bounded PERT/Beta
//! distribution, runs a Monte Carlo simulation of the factor of safety
//! against a fixed resisting capacity, and produces the samples,
//! frequency-scaled density curves, and failure statistics an
//! interactive figure layer renders.
//!
//! Each estimation is stateless and independent: a private RNG per call,
//! optionally seeded for reproducibility.

pub mod density;
pub mod distribution;
pub mod scenario;
pub mod simulation;
pub mod types;

pub use scenario::{Scenario, ScenarioComparison};
pub use simulation::{StabilityEstimator, FAILURE_THRESHOLD};
pub use types::{DensityCurve, FailureStats, ShapeMode, SlopeGeometry, StabilityEstimate};
