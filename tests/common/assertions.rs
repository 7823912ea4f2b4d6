use arcade_flyer::{
    components::{FlightPhase, FlightState, FULL_TANK},
    resources::FlightConfig,
};
use pretty_assertions::assert_eq;

/// Assert that a flight state satisfies every invariant of the flight model
#[track_caller]
pub fn assert_flight_state_valid(state: &FlightState, config: &FlightConfig) {
    // Verify everything is finite
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(state.speed.is_finite(), "Speed is not finite");
    assert!(
        state.vertical_speed.is_finite(),
        "Vertical speed is not finite"
    );

    assert!(
        (0.0..=FULL_TANK).contains(&state.fuel),
        "Fuel out of range: {}",
        state.fuel
    );
    assert!(state.speed >= 0.0, "Negative speed: {}", state.speed);
    if state.engine_on {
        assert!(state.fuel > 0.0, "Engine running on an empty tank");
    }

    match state.phase {
        FlightPhase::Grounded => {
            assert_eq!(state.position.y, state.ground_y, "Grounded above the ground");
            assert_eq!(state.vertical_speed, 0.0, "Grounded with vertical speed");
        }
        FlightPhase::Airborne => {
            assert!(
                state.orientation.pitch.abs() <= config.max_pitch,
                "Pitch {} exceeds limit",
                state.orientation.pitch
            );
            assert!(
                state.orientation.roll.abs() <= config.max_roll,
                "Roll {} exceeds limit",
                state.orientation.roll
            );
        }
    }
}

/// Assert that the state is exactly the one a reset produces
#[track_caller]
pub fn assert_canonical_reset(state: &FlightState, ground_y: f64) {
    assert_eq!(*state, FlightState::new(ground_y));
}
