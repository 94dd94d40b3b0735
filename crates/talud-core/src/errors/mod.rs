//! Error handling for talud.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod parameter_error;

pub use config_error::ConfigError;
pub use error_code::TaludErrorCode;
pub use parameter_error::ParameterError;
