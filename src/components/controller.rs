use bevy::prelude::*;

/// Marks the aircraft flown by the local player. The flight, camera and HUD
/// systems all expect exactly one such entity.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerController;
