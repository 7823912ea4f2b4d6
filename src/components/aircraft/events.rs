use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Why the aircraft was put back at the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetCause {
    Crash,
    FuelExhausted,
    Requested,
}

/// Notable outcomes of a flight step, in the order they happened.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlightEvent {
    TookOff { speed: f64 },
    Landed { vertical_speed: f64 },
    Crashed { pitch: f64, vertical_speed: f64 },
    FuelExhausted,
    Reset(ResetCause),
}

/// Asks the flight system to reset the player aircraft on its next step.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetRequest;
