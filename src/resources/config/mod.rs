pub mod flight;
pub mod physics;
pub mod render;
pub mod simulation;

pub use flight::{
    FlightConfig, FlightPolicy, ForwardAxis, FuelOutPolicy, Integration, TakeoffPolicy,
};
pub use physics::PhysicsConfig;
pub use render::{ChaseCameraConfig, HudConfig, RenderConfig};
pub use simulation::SimulationConfig;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    #[error("Unknown key name: {0}")]
    UnknownKey(String),
}
