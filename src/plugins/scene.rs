use bevy::prelude::*;

use crate::plugins::StartupStage;
use crate::systems::{
    aircraft_render_system, propeller_system, spawn_aircraft_model, spawn_scene,
};

/// Ground, lights and the aircraft model.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                spawn_aircraft_model.after(StartupStage::BuildAircraft),
                spawn_scene.in_set(StartupStage::BuildScene),
            ),
        )
        .add_systems(Update, (aircraft_render_system, propeller_system));
    }
}
