use bevy::prelude::*;

use crate::components::{CameraComponent, FlightState, PlayerController};
use crate::plugins::StartupStage;
use crate::resources::RenderConfig;
use crate::systems::{aircraft_render_system, camera_follow_system, render_translation};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera.in_set(StartupStage::BuildCameras))
            .add_systems(Update, camera_follow_system.after(aircraft_render_system));
    }
}

fn spawn_camera(
    mut commands: Commands,
    player_query: Query<(Entity, &FlightState), With<PlayerController>>,
    config: Res<RenderConfig>,
) {
    if let Ok((player_entity, state)) = player_query.get_single() {
        let camera = CameraComponent::from_config(&config.camera).following(player_entity);
        let eye = camera.desired_eye(&state.position, &state.orientation);
        let target = render_translation(&state.position);

        commands.spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: config.fov.to_radians(),
                far: config.draw_distance,
                ..default()
            }),
            Transform::from_translation(render_translation(&eye)).looking_at(target, Vec3::Y),
            camera,
            Name::new("Chase Camera"),
        ));
    } else {
        warn!("No player entity found when spawning camera!");
    }
}
