use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::ForwardAxis;

/// Tank capacity, also the fuel level after a reset.
pub const FULL_TANK: f64 = 100.0;

/// Which set of dynamics currently applies to the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    Grounded,
    Airborne,
}

/// Phase changes the flight model can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    Takeoff,
    Landing,
    Crash,
}

impl FlightPhase {
    /// Phase reached by applying `transition`, or `None` if it is not allowed from here.
    pub fn apply(self, transition: Transition) -> Option<FlightPhase> {
        match (self, transition) {
            (FlightPhase::Grounded, Transition::Takeoff) => Some(FlightPhase::Airborne),
            (FlightPhase::Airborne, Transition::Landing) => Some(FlightPhase::Grounded),
            (FlightPhase::Airborne, Transition::Crash) => Some(FlightPhase::Grounded),
            _ => None,
        }
    }
}

/// Euler attitude of the aircraft (radians).
///
/// Pitch is positive nose up, roll positive right wing down and yaw positive
/// nose left, seen from above in a Y-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl Orientation {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Body to world rotation: heading, then pitch, then bank.
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -self.roll)
    }

    /// Unit vector along the ground track for the current yaw.
    pub fn heading(&self, axis: ForwardAxis) -> Vector3<f64> {
        let (sin, cos) = self.yaw.sin_cos();
        match axis {
            ForwardAxis::NegativeZ => Vector3::new(-sin, 0.0, -cos),
            ForwardAxis::PositiveZ => Vector3::new(sin, 0.0, cos),
        }
    }
}

/// Kinematic and engine state of the player aircraft.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// World position, y is altitude.
    pub position: Vector3<f64>,
    pub orientation: Orientation,
    /// Forward speed, never negative.
    pub speed: f64,
    /// Climb rate, negative when descending.
    pub vertical_speed: f64,
    pub phase: FlightPhase,
    /// Fuel left, 0 to [`FULL_TANK`].
    pub fuel: f64,
    pub engine_on: bool,
    /// Height of the aircraft origin when resting on the ground.
    pub ground_y: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl FlightState {
    /// Aircraft parked at the origin with a full tank.
    pub fn new(ground_y: f64) -> Self {
        Self {
            position: Vector3::new(0.0, ground_y, 0.0),
            orientation: Orientation::default(),
            speed: 0.0,
            vertical_speed: 0.0,
            phase: FlightPhase::Grounded,
            fuel: FULL_TANK,
            engine_on: false,
            ground_y,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == FlightPhase::Airborne
    }

    /// Height above the ground, zero while grounded.
    pub fn altitude(&self) -> f64 {
        (self.position.y - self.ground_y).max(0.0)
    }

    /// Returns every field except `ground_y` to its value at load time.
    pub fn reset(&mut self) {
        *self = Self::new(self.ground_y);
    }
}
