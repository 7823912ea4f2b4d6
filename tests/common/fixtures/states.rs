use arcade_flyer::components::{AircraftModel, FlightPhase, FlightState};

/// Ground height of the default aircraft model
pub fn default_ground_y() -> f64 {
    AircraftModel::default().ground_y()
}

/// Aircraft parked on the runway
pub fn create_parked_state() -> FlightState {
    FlightState::new(default_ground_y())
}

/// Level flight at `speed`, `altitude` above the ground
pub fn create_airborne_state(speed: f64, altitude: f64) -> FlightState {
    let mut state = create_parked_state();
    state.phase = FlightPhase::Airborne;
    state.speed = speed;
    state.position.y = state.ground_y + altitude;
    state
}
