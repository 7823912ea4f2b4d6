use crate::components::{FlightEvent, FlightPhase, FlightState, InputIntent, ResetCause, Transition};
use crate::resources::{FlightConfig, FuelOutPolicy, TakeoffPolicy};

/// Advances `state` by one frame.
///
/// `dt` is only read when the config asks for delta-scaled integration. The
/// returned events are in the order they happened during the frame.
pub fn step(
    state: &mut FlightState,
    config: &FlightConfig,
    intent: &InputIntent,
    dt: f64,
) -> Vec<FlightEvent> {
    let scale = config.policy.integration.scale(dt);
    let mut events = Vec::new();

    if burn_fuel(state, config, intent, scale) {
        events.push(FlightEvent::FuelExhausted);
        if config.policy.fuel_out == FuelOutPolicy::Reset {
            reset(state, ResetCause::FuelExhausted, &mut events);
            return events;
        }
    }

    update_speed(state, config, intent, scale);

    if takeoff_allowed(state, config, intent) {
        apply_transition(state, Transition::Takeoff);
        state.vertical_speed = config.takeoff_boost;
        events.push(FlightEvent::TookOff { speed: state.speed });
    }

    match state.phase {
        FlightPhase::Airborne => {
            if !fly(state, config, intent, scale, &mut events) {
                return events;
            }
        }
        FlightPhase::Grounded => taxi(state, config, intent, scale),
    }

    let heading = state.orientation.heading(config.policy.forward_axis);
    state.position += heading * state.speed * scale;

    events
}

/// Puts the aircraft back at the start and records why.
pub fn reset(state: &mut FlightState, cause: ResetCause, events: &mut Vec<FlightEvent>) {
    state.reset();
    events.push(FlightEvent::Reset(cause));
}

fn apply_transition(state: &mut FlightState, transition: Transition) {
    match state.phase.apply(transition) {
        Some(next) => state.phase = next,
        None => debug_assert!(
            false,
            "{:?} is not allowed from {:?}",
            transition, state.phase
        ),
    }
}

/// Updates the engine and tank. Returns true on the frame the tank runs dry.
fn burn_fuel(
    state: &mut FlightState,
    config: &FlightConfig,
    intent: &InputIntent,
    scale: f64,
) -> bool {
    state.engine_on = intent.throttle && state.fuel > 0.0;
    if !state.engine_on || config.unlimited_fuel {
        return false;
    }

    state.fuel = (state.fuel - config.fuel_consumption * scale).max(0.0);
    if state.fuel > 0.0 {
        return false;
    }

    state.engine_on = false;
    true
}

fn update_speed(state: &mut FlightState, config: &FlightConfig, intent: &InputIntent, scale: f64) {
    if state.engine_on {
        state.speed += config.acceleration * scale;
    }
    if intent.brake {
        state.speed -= config.braking * scale;
    }
    state.speed *= (1.0 - config.friction).powf(scale);
    state.speed = state.speed.max(0.0);
}

fn takeoff_allowed(state: &FlightState, config: &FlightConfig, intent: &InputIntent) -> bool {
    // Holding the nose down keeps the wheels on the runway.
    if state.is_airborne() || state.speed <= config.takeoff_speed || intent.pitch_down {
        return false;
    }
    match config.policy.takeoff {
        TakeoffPolicy::RequireClimbInput => intent.pitch_up,
        TakeoffPolicy::Automatic => true,
    }
}

fn is_stalled(state: &FlightState, config: &FlightConfig) -> bool {
    config
        .stall_speed
        .is_some_and(|stall_speed| state.speed <= stall_speed)
}

/// Airborne dynamics. Returns false if the frame ended in a crash reset.
fn fly(
    state: &mut FlightState,
    config: &FlightConfig,
    intent: &InputIntent,
    scale: f64,
    events: &mut Vec<FlightEvent>,
) -> bool {
    state.vertical_speed -= config.gravity * scale;
    if !is_stalled(state, config) {
        // Baseline lift trims out gravity, so hands-off flight holds altitude.
        state.vertical_speed += config.gravity * scale;
        if intent.pitch_up {
            state.vertical_speed += config.lift * (state.speed / config.takeoff_speed) * scale;
        }
        if intent.pitch_down {
            state.vertical_speed -= config.lift * config.dive_factor * scale;
        }
    }
    state.position.y += state.vertical_speed * scale;

    if state.position.y < state.ground_y {
        return touch_down(state, config, events);
    }

    let orientation = &mut state.orientation;
    if intent.pitch_up {
        orientation.pitch += config.pitch_rate * scale;
    }
    if intent.pitch_down {
        orientation.pitch -= config.pitch_rate * scale;
    }
    orientation.pitch = orientation.pitch.clamp(-config.max_pitch, config.max_pitch);

    if intent.roll_right {
        orientation.roll += config.roll_rate * scale;
    }
    if intent.roll_left {
        orientation.roll -= config.roll_rate * scale;
    }
    orientation.roll *= config.roll_damping.powf(scale);
    orientation.roll = orientation.roll.clamp(-config.max_roll, config.max_roll);

    orientation.yaw -= orientation.roll * config.yaw_coupling * scale;
    true
}

/// Ground contact, judged on the attitude the aircraft arrived with.
/// Returns false if the contact was a crash.
fn touch_down(
    state: &mut FlightState,
    config: &FlightConfig,
    events: &mut Vec<FlightEvent>,
) -> bool {
    let pitch = state.orientation.pitch;
    let vertical_speed = state.vertical_speed;

    if pitch.abs() > config.crash_pitch || vertical_speed.abs() > config.crash_vertical_speed {
        apply_transition(state, Transition::Crash);
        events.push(FlightEvent::Crashed {
            pitch,
            vertical_speed,
        });
        reset(state, ResetCause::Crash, events);
        return false;
    }

    apply_transition(state, Transition::Landing);
    state.position.y = state.ground_y;
    state.vertical_speed = 0.0;
    state.orientation.pitch = 0.0;
    state.orientation.roll = 0.0;
    events.push(FlightEvent::Landed { vertical_speed });
    true
}

fn taxi(state: &mut FlightState, config: &FlightConfig, intent: &InputIntent, scale: f64) {
    state.position.y = state.ground_y;
    state.vertical_speed = 0.0;

    if state.speed > config.min_taxi_speed {
        if intent.roll_left {
            state.orientation.yaw += config.turn_speed * scale;
        }
        if intent.roll_right {
            state.orientation.yaw -= config.turn_speed * scale;
        }
    }

    let decay = config.ground_attitude_decay.powf(scale);
    state.orientation.pitch *= decay;
    state.orientation.roll *= decay;
}
