mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_canonical_reset, assert_flight_state_valid};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
