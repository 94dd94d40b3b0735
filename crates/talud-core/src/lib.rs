//! talud-core — errors, configuration, and tracing setup for the talud
//! probabilistic slope-stability engine.
//!
//! This crate knows nothing about distributions or simulation; it provides
//! the shared plumbing the analysis crate builds on.

pub mod config;
pub mod errors;
pub mod telemetry;
