use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AircraftModel, FlightEvent, FlightState, Orientation, PartRole, PlayerController, Propeller,
};
use crate::resources::FlightConfig;

pub fn render_translation(position: &Vector3<f64>) -> Vec3 {
    Vec3::new(position.x as f32, position.y as f32, position.z as f32)
}

/// Same rotation as [`Orientation::rotation`], in render precision.
pub fn render_rotation(orientation: &Orientation) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        orientation.yaw as f32,
        orientation.pitch as f32,
        -orientation.roll as f32,
    )
}

/// Places the aircraft mesh where the flight model says it is.
pub fn aircraft_render_system(
    mut query: Query<(&FlightState, &mut Transform), With<PlayerController>>,
) {
    for (state, mut transform) in query.iter_mut() {
        transform.translation = render_translation(&state.position);
        transform.rotation = render_rotation(&state.orientation);
    }
}

/// Builds the box model under the player aircraft.
pub fn spawn_aircraft_model(
    mut commands: Commands,
    query: Query<Entity, With<PlayerController>>,
    model: Res<AircraftModel>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(aircraft) = query.get_single() else {
        warn!("No player aircraft to attach a model to");
        return;
    };

    info!("Building aircraft model from {} parts", model.parts.len());
    commands.entity(aircraft).with_children(|parent| {
        for part in &model.parts {
            let [x, y, z] = part.size;
            let [r, g, b] = part.color;
            let mut child = parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(x as f32, y as f32, z as f32))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::linear_rgb(r, g, b),
                    perceptual_roughness: 0.8,
                    ..default()
                })),
                Transform::from_translation(render_translation(&Vector3::from(part.offset))),
                Name::new(part.name.clone()),
            ));
            if part.role == PartRole::Propeller {
                child.insert(Propeller::default());
            }
        }
    });
}

/// Spins propellers while the engine runs and squares them up after a reset.
pub fn propeller_system(
    mut propellers: Query<(&Propeller, &mut Transform)>,
    aircraft: Query<&FlightState, With<PlayerController>>,
    config: Res<FlightConfig>,
    time: Res<Time>,
    mut flight_events: EventReader<FlightEvent>,
) {
    let Ok(state) = aircraft.get_single() else {
        return;
    };
    let was_reset = flight_events
        .read()
        .any(|event| matches!(event, FlightEvent::Reset(_)));

    for (propeller, mut transform) in propellers.iter_mut() {
        if was_reset {
            transform.rotation = Quat::IDENTITY;
            continue;
        }
        let rate = propeller.spin_rate(state.engine_on, state.speed, config.takeoff_speed);
        transform.rotate_local_z(rate * time.delta_secs());
    }
}
