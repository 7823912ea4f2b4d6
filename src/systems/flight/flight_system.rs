use bevy::prelude::*;

use super::state_machine::{reset, step};
use crate::components::{
    FlightEvent, FlightState, InputIntent, PlayerController, ResetCause, ResetRequest,
};
use crate::resources::FlightConfig;

/// Steps the player aircraft once per fixed frame and publishes what happened.
pub fn flight_step_system(
    mut query: Query<&mut FlightState, With<PlayerController>>,
    config: Res<FlightConfig>,
    intent: Res<InputIntent>,
    time: Res<Time>,
    mut reset_requests: EventReader<ResetRequest>,
    mut flight_events: EventWriter<FlightEvent>,
) {
    let Ok(mut state) = query.get_single_mut() else {
        return;
    };

    let mut events = Vec::new();
    if reset_requests.read().count() > 0 {
        reset(&mut state, ResetCause::Requested, &mut events);
    }
    events.extend(step(&mut state, &config, &intent, time.delta_secs_f64()));

    for event in events {
        log_flight_event(&event);
        flight_events.send(event);
    }
}

fn log_flight_event(event: &FlightEvent) {
    match event {
        FlightEvent::TookOff { speed } => info!("Took off at speed {:.3}", speed),
        FlightEvent::Landed { vertical_speed } => {
            info!("Landed with vertical speed {:.3}", vertical_speed)
        }
        FlightEvent::Crashed {
            pitch,
            vertical_speed,
        } => warn!(
            "Crashed! pitch {:.3} rad, vertical speed {:.3}",
            pitch, vertical_speed
        ),
        FlightEvent::FuelExhausted => warn!("Out of fuel!"),
        FlightEvent::Reset(cause) => info!("Aircraft reset ({:?})", cause),
    }
}
