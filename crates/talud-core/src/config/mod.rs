//! Configuration system for talud.
//! TOML-based, two-layer resolution: project file (`talud.toml`) > defaults.

pub mod geometry_config;
pub mod simulation_config;
pub mod talud_config;

pub use geometry_config::GeometryConfig;
pub use simulation_config::SimulationConfig;
pub use talud_config::TaludConfig;
