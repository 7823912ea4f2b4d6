pub mod controls;
pub mod events;
pub mod model;
pub mod render;
pub mod state;

pub use controls::InputIntent;
pub use events::{FlightEvent, ResetCause, ResetRequest};
pub use model::{AircraftModel, Bounds, ModelPart, PartRole};
pub use render::Propeller;
pub use state::{FlightPhase, FlightState, Orientation, Transition, FULL_TANK};
