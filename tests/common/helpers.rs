use arcade_flyer::{
    components::{FlightEvent, FlightState, InputIntent},
    resources::FlightConfig,
    systems::step,
};
use rand::Rng;

use crate::common::assert_flight_state_valid;

/// Frame time handed to the flight model, only read by delta-scaled integration
pub const TEST_DT: f64 = 1.0 / 60.0;

/// Steps the flight model `frames` times with a held intent, returning every event
pub fn run_frames(
    state: &mut FlightState,
    config: &FlightConfig,
    intent: &InputIntent,
    frames: usize,
) -> Vec<FlightEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        events.extend(step(state, config, intent, TEST_DT));
        assert_flight_state_valid(state, config);
    }
    events
}

/// Steps until an event matches `stop`, giving up after `max_frames`.
/// Returns the events seen and whether `stop` matched.
pub fn run_until(
    state: &mut FlightState,
    config: &FlightConfig,
    intent: &InputIntent,
    max_frames: usize,
    stop: impl Fn(&FlightEvent) -> bool,
) -> (Vec<FlightEvent>, bool) {
    let mut events = Vec::new();
    for _ in 0..max_frames {
        let new_events = step(state, config, intent, TEST_DT);
        assert_flight_state_valid(state, config);
        let done = new_events.iter().any(&stop);
        events.extend(new_events);
        if done {
            return (events, true);
        }
    }
    (events, false)
}

/// Random held intent
pub fn random_intent<R: Rng>(rng: &mut R) -> InputIntent {
    InputIntent {
        throttle: rng.gen_bool(0.7),
        brake: rng.gen_bool(0.2),
        pitch_up: rng.gen_bool(0.5),
        pitch_down: rng.gen_bool(0.5),
        roll_left: rng.gen_bool(0.5),
        roll_right: rng.gen_bool(0.5),
    }
}

pub fn count_events(events: &[FlightEvent], matches: impl Fn(&FlightEvent) -> bool) -> usize {
    events.iter().filter(|event| matches(event)).count()
}
