use bevy::prelude::*;

/// Spinning part of the aircraft model.
#[derive(Component, Debug, Clone, Copy)]
pub struct Propeller {
    /// Spin rate at takeoff speed (rad/s).
    pub rate_at_takeoff: f32,
}

impl Default for Propeller {
    fn default() -> Self {
        Self {
            rate_at_takeoff: 40.0,
        }
    }
}

impl Propeller {
    /// Spin rate for the given engine state, proportional to `speed / takeoff_speed`.
    pub fn spin_rate(&self, engine_on: bool, speed: f64, takeoff_speed: f64) -> f32 {
        if !engine_on {
            return 0.0;
        }
        self.rate_at_takeoff * (speed / takeoff_speed) as f32
    }
}
