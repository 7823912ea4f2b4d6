use arcade_flyer::{
    components::{FlightEvent, InputIntent, ResetCause},
    resources::{FlightConfig, KeyBindings, PhysicsConfig, SimulationConfig},
};
use bevy::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{
    assert_canonical_reset, assert_flight_state_valid, count_events, create_airborne_state,
    create_automatic_takeoff_config, create_test_simulation_config, create_unlimited_fuel_config,
    default_ground_y, TestAppBuilder,
};

#[test]
fn test_plugin_spawns_parked_aircraft() {
    let mut app = TestAppBuilder::new().build();

    assert_eq!(app.aircraft_count(), 1);
    assert_canonical_reset(&app.flight_state(), default_ground_y());

    assert!(app.get_resource::<FlightConfig>().is_some());
    assert!(app.get_resource::<KeyBindings>().is_some());
    assert_eq!(
        app.get_resource::<Time<Fixed>>().map(|time| time.timestep()),
        Some(std::time::Duration::from_secs_f64(1.0 / 60.0))
    );
}

#[test]
fn test_plugin_takeoff_emits_one_event() {
    let mut app = TestAppBuilder::new()
        .with_intent(InputIntent::idle().with_throttle().with_pitch_up())
        .build();

    let events = app.run_frames(200);

    assert_eq!(
        count_events(&events, |event| matches!(event, FlightEvent::TookOff { .. })),
        1
    );
    let state = app.flight_state();
    assert!(state.is_airborne());
    assert_flight_state_valid(&state, &FlightConfig::default());
}

#[test]
fn test_plugin_applies_intent_changes() {
    let mut app = TestAppBuilder::new()
        .with_flight(create_unlimited_fuel_config())
        .build();

    app.set_intent(InputIntent::idle().with_throttle());
    app.run_frames(100);
    let fast = app.flight_state().speed;
    assert!(fast > 0.0);

    app.set_intent(InputIntent::idle().with_brake());
    app.run_frames(100);
    assert_eq!(app.flight_state().speed, 0.0);
}

#[test]
fn test_reset_request() {
    let mut app = TestAppBuilder::new()
        .with_intent(InputIntent::idle().with_throttle())
        .build();
    app.run_frames(50);
    assert!(app.flight_state().fuel < 100.0);

    app.set_intent(InputIntent::idle());
    app.request_reset();
    let events = app.run_frame();

    assert_eq!(events, vec![FlightEvent::Reset(ResetCause::Requested)]);
    assert_canonical_reset(&app.flight_state(), default_ground_y());

    // The request is consumed
    assert!(app.run_frame().is_empty());
}

#[test]
fn test_plugin_crash_resets_aircraft() {
    let mut app = TestAppBuilder::new().build();
    let config = FlightConfig::default();
    let mut state = create_airborne_state(0.1, 0.001);
    state.orientation.pitch = config.max_pitch + 1e-3;
    app.set_flight_state(state);

    let events = app.run_frame();

    assert!(matches!(
        events.as_slice(),
        [FlightEvent::Crashed { .. }, FlightEvent::Reset(ResetCause::Crash)]
    ));
    assert_canonical_reset(&app.flight_state(), default_ground_y());
}

#[test]
fn test_automatic_takeoff_policy() {
    let mut app = TestAppBuilder::new()
        .with_config(create_test_simulation_config(
            create_automatic_takeoff_config(),
        ))
        .with_intent(InputIntent::idle().with_throttle())
        .build();

    let events = app.run_frames(100);

    assert_eq!(
        count_events(&events, |event| matches!(event, FlightEvent::TookOff { .. })),
        1
    );
    assert!(app.flight_state().is_airborne());
}

#[test]
fn test_plugin_from_yaml_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(
        temp_file,
        "flight:\n  unlimited_fuel: true\nphysics:\n  frame_rate: 30.0\ncontrols:\n  throttle: [Space]"
    )?;
    let config = SimulationConfig::load(temp_file.path())?;

    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_intent(InputIntent::idle().with_throttle())
        .build();
    app.run_frames(100);

    assert_eq!(app.flight_state().fuel, 100.0);
    assert_eq!(
        app.get_resource::<PhysicsConfig>().map(|physics| physics.frame_rate),
        Some(30.0)
    );
    let bindings = app.get_resource::<KeyBindings>().ok_or("no bindings")?;
    assert_eq!(
        bindings.intent(KeyCode::Space),
        Some(arcade_flyer::resources::Intent::Throttle)
    );
    assert_eq!(bindings.intent(KeyCode::KeyW), None);
    Ok(())
}
