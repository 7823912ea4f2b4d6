pub mod aircraft;
pub mod camera;
mod controller;

pub use aircraft::{
    AircraftModel, Bounds, FlightEvent, FlightPhase, FlightState, InputIntent, ModelPart,
    Orientation, PartRole, Propeller, ResetCause, ResetRequest, Transition, FULL_TANK,
};
pub use camera::CameraComponent;
pub use controller::PlayerController;
