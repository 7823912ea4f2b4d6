use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

use super::ConfigError;

/// Tuning for the arcade flight model.
///
/// All rates are expressed per frame. With [`Integration::DeltaScaled`] they are
/// rescaled by the measured frame time, otherwise one step is one frame.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Speed gained per frame while the engine runs.
    pub acceleration: f64,
    /// Speed lost per frame while the brake is held.
    pub braking: f64,
    /// Fraction of the current speed lost to drag every frame.
    pub friction: f64,
    /// Yaw rate while taxiing (rad/frame).
    pub turn_speed: f64,
    /// Speed above which the aircraft can leave the ground.
    pub takeoff_speed: f64,
    /// Speed at or below which an airborne aircraft produces no lift.
    pub stall_speed: Option<f64>,
    /// Climb lift coefficient, scaled by `speed / takeoff_speed`.
    pub lift: f64,
    /// Vertical speed lost per frame while airborne.
    pub gravity: f64,
    /// Fuel burnt per frame while the engine runs.
    pub fuel_consumption: f64,
    /// Pitch control limit (rad).
    pub max_pitch: f64,
    /// Roll control limit (rad).
    pub max_roll: f64,
    /// Pitch change per frame of held pitch input (rad).
    pub pitch_rate: f64,
    /// Roll change per frame of held roll input (rad).
    pub roll_rate: f64,
    /// Geometric roll decay applied every airborne frame.
    pub roll_damping: f64,
    /// Yaw change per frame per radian of bank.
    pub yaw_coupling: f64,
    /// Fraction of `lift` removed per frame while diving.
    pub dive_factor: f64,
    /// Below this speed the aircraft cannot steer on the ground.
    pub min_taxi_speed: f64,
    /// Geometric pitch/roll decay applied every grounded frame.
    pub ground_attitude_decay: f64,
    /// Vertical speed given to the aircraft on the takeoff frame. Must be
    /// positive under [`TakeoffPolicy::Automatic`], which has no climb input.
    pub takeoff_boost: f64,
    /// Touchdown vertical speed above which contact is a crash.
    pub crash_vertical_speed: f64,
    /// Touchdown pitch above which contact is a crash. Never above `max_pitch`.
    pub crash_pitch: f64,
    /// Solar engine: the engine never burns fuel. Can be toggled in flight.
    pub unlimited_fuel: bool,
    pub policy: FlightPolicy,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            acceleration: 0.01,
            braking: 0.02,
            friction: 0.005,
            turn_speed: 0.02,
            takeoff_speed: 0.3,
            stall_speed: Some(0.2),
            lift: 0.01,
            gravity: 0.005,
            fuel_consumption: 0.02,
            max_pitch: FRAC_PI_3,
            max_roll: FRAC_PI_3,
            pitch_rate: 0.01,
            roll_rate: 0.02,
            roll_damping: 0.95,
            yaw_coupling: 0.02,
            dive_factor: 0.5,
            min_taxi_speed: 0.01,
            ground_attitude_decay: 0.9,
            takeoff_boost: 0.0,
            crash_vertical_speed: 0.2,
            crash_pitch: FRAC_PI_4,
            unlimited_fuel: false,
            policy: FlightPolicy::default(),
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.takeoff_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "takeoff_speed must be positive".to_string(),
            ));
        }

        let non_negative = [
            ("acceleration", self.acceleration),
            ("braking", self.braking),
            ("friction", self.friction),
            ("turn_speed", self.turn_speed),
            ("lift", self.lift),
            ("gravity", self.gravity),
            ("fuel_consumption", self.fuel_consumption),
            ("max_pitch", self.max_pitch),
            ("max_roll", self.max_roll),
            ("pitch_rate", self.pitch_rate),
            ("roll_rate", self.roll_rate),
            ("yaw_coupling", self.yaw_coupling),
            ("dive_factor", self.dive_factor),
            ("min_taxi_speed", self.min_taxi_speed),
            ("takeoff_boost", self.takeoff_boost),
            ("crash_vertical_speed", self.crash_vertical_speed),
            ("crash_pitch", self.crash_pitch),
        ];
        if let Some((name, value)) = non_negative
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(ConfigError::ValidationError(format!(
                "{name} must be a finite non-negative number, got {value}"
            )));
        }

        if let Some(stall) = self.stall_speed {
            if !stall.is_finite() || stall < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "stall_speed must be non-negative, got {stall}"
                )));
            }
        }

        for (name, factor) in [
            ("roll_damping", self.roll_damping),
            ("ground_attitude_decay", self.ground_attitude_decay),
        ] {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be in (0, 1], got {factor}"
                )));
            }
        }

        if self.friction >= 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "friction must be below 1, got {}",
                self.friction
            )));
        }

        if self.policy.takeoff == TakeoffPolicy::Automatic && self.takeoff_boost <= 0.0 {
            return Err(ConfigError::ValidationError(
                "takeoff_boost must be positive with the automatic takeoff policy".to_string(),
            ));
        }

        if self.crash_pitch > self.max_pitch {
            return Err(ConfigError::ValidationError(format!(
                "crash_pitch ({}) cannot exceed max_pitch ({})",
                self.crash_pitch, self.max_pitch
            )));
        }

        if let Integration::DeltaScaled { reference_hz } = self.policy.integration {
            if reference_hz <= 0.0 {
                return Err(ConfigError::ValidationError(
                    "reference_hz must be positive".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Behaviour choices the flight model leaves open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightPolicy {
    pub fuel_out: FuelOutPolicy,
    pub takeoff: TakeoffPolicy,
    pub forward_axis: ForwardAxis,
    pub integration: Integration,
}

/// What happens when the tank runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelOutPolicy {
    /// The engine cuts out and the aircraft glides.
    #[default]
    Glide,
    /// The aircraft is reset as soon as the fuel reaches zero.
    Reset,
}

/// Guard for leaving the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TakeoffPolicy {
    /// Rotate with pitch-up once above takeoff speed.
    #[default]
    RequireClimbInput,
    /// Leave the ground as soon as takeoff speed is exceeded.
    Automatic,
}

/// Model axis the nose points along at zero yaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardAxis {
    #[default]
    NegativeZ,
    PositiveZ,
}

/// How per-frame rates relate to wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    /// One step is one frame, regardless of its duration.
    #[default]
    PerFrame,
    /// Rates are defined at `reference_hz` and scaled by the frame time.
    DeltaScaled { reference_hz: f64 },
}

impl Integration {
    /// Number of reference frames covered by a step of `dt` seconds.
    pub fn scale(&self, dt: f64) -> f64 {
        match self {
            Integration::PerFrame => 1.0,
            Integration::DeltaScaled { reference_hz } => dt * reference_hz,
        }
    }
}
