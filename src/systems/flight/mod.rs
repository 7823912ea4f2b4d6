mod flight_system;
pub mod state_machine;

pub use flight_system::flight_step_system;
pub use state_machine::{reset, step};
