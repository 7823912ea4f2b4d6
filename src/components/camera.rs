use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::Orientation;
use crate::resources::ChaseCameraConfig;

/// Camera that trails an aircraft at a fixed body-frame offset.
#[derive(Component, Debug, Clone)]
pub struct CameraComponent {
    pub target: Option<Entity>,
    /// Offset in the target's body frame.
    pub offset: Vector3<f64>,
    /// Fraction of the remaining distance covered each frame.
    pub smoothing: f64,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self::from_config(&ChaseCameraConfig::default())
    }
}

impl CameraComponent {
    pub fn from_config(config: &ChaseCameraConfig) -> Self {
        Self {
            target: None,
            offset: Vector3::from(config.offset),
            smoothing: config.smoothing,
        }
    }

    pub fn following(mut self, target: Entity) -> Self {
        self.target = Some(target);
        self
    }

    /// Where the camera wants to be for a target at `position` with `orientation`.
    pub fn desired_eye(&self, position: &Vector3<f64>, orientation: &Orientation) -> Vector3<f64> {
        position + orientation.rotation() * self.offset
    }

    /// Moves `current` towards the desired eye by the smoothing fraction.
    pub fn next_eye(
        &self,
        current: &Vector3<f64>,
        position: &Vector3<f64>,
        orientation: &Orientation,
    ) -> Vector3<f64> {
        let desired = self.desired_eye(position, orientation);
        current + (desired - current) * self.smoothing
    }
}
