use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Pilot input sampled for one frame. Each field is a held level.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputIntent {
    pub throttle: bool,
    pub brake: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
}

impl InputIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_throttle(mut self) -> Self {
        self.throttle = true;
        self
    }

    pub fn with_brake(mut self) -> Self {
        self.brake = true;
        self
    }

    pub fn with_pitch_up(mut self) -> Self {
        self.pitch_up = true;
        self
    }

    pub fn with_pitch_down(mut self) -> Self {
        self.pitch_down = true;
        self
    }

    pub fn with_roll_left(mut self) -> Self {
        self.roll_left = true;
        self
    }

    pub fn with_roll_right(mut self) -> Self {
        self.roll_right = true;
        self
    }
}
