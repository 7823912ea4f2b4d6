use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Rate of the fixed simulation loop.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Flight steps per second.
    pub frame_rate: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { frame_rate: 60.0 }
    }
}

impl PhysicsConfig {
    pub fn timestep(&self) -> f64 {
        1.0 / self.frame_rate
    }
}
