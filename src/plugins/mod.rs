mod camera;
mod controls;
mod flight;
mod hud;
mod scene;
mod staging;

pub use camera::CameraPlugin;
pub use controls::ControlsPlugin;
pub use flight::{drain_flight_events, run_flight_frame, FlightSet, FlightSimPlugin};
pub use hud::HudPlugin;
pub use scene::ScenePlugin;
pub use staging::{StartupSequencePlugin, StartupStage};
