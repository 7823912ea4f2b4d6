use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{CameraComponent, FlightState};
use crate::systems::render::render_translation;

/// Keeps each chase camera behind its target and looking at it.
pub fn camera_follow_system(
    mut camera_query: Query<(&CameraComponent, &mut Transform)>,
    target_query: Query<&FlightState>,
) {
    for (camera, mut transform) in camera_query.iter_mut() {
        let Some(state) = camera.target.and_then(|target| target_query.get(target).ok()) else {
            continue;
        };

        let current = Vector3::new(
            transform.translation.x as f64,
            transform.translation.y as f64,
            transform.translation.z as f64,
        );
        let eye = camera.next_eye(&current, &state.position, &state.orientation);

        transform.translation = render_translation(&eye);
        transform.look_at(render_translation(&state.position), Vec3::Y);
    }
}
