use bevy::prelude::*;

use crate::resources::RenderConfig;

/// Flat ground plane and lighting.
pub fn spawn_scene(
    mut commands: Commands,
    config: Res<RenderConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground = Plane3d::default()
        .mesh()
        .size(config.ground_size, config.ground_size);
    commands.spawn((
        Mesh3d(meshes.add(ground)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x55, 0x6b, 0x2f),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::IDENTITY,
        Name::new("Ground"),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 500.0,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: light_consts::lux::OVERCAST_DAY,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 7.5).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));
    commands.insert_resource(ClearColor(Color::srgb(0.53, 0.81, 0.92)));

    debug!("Scene built with a {0}x{0} ground plane", config.ground_size);
}
