use bevy::prelude::*;

use crate::plugins::StartupStage;
use crate::systems::{hud_banner_system, hud_update_system, spawn_hud};

/// Speed, altitude and fuel readouts plus event banners.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud.in_set(StartupStage::BuildHud))
            .add_systems(Update, (hud_update_system, hud_banner_system));
    }
}
