mod bindings;
pub mod config;

pub use bindings::{parse_key, BindingsConfig, Intent, KeyBindings};
pub use config::{
    ChaseCameraConfig, ConfigError, FlightConfig, FlightPolicy, ForwardAxis, FuelOutPolicy,
    HudConfig, Integration, PhysicsConfig, RenderConfig, SimulationConfig, TakeoffPolicy,
};
