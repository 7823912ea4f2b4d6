use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::systems::{keyboard_fuel_toggle_system, keyboard_intent_system, keyboard_reset_system};

/// Keyboard piloting. Requires bevy's input plugin.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, keyboard_intent_system.in_set(FlightSet::Input))
            .add_systems(Update, (keyboard_reset_system, keyboard_fuel_toggle_system));
    }
}
