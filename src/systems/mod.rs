mod camera;
mod controller;
pub mod flight;
mod hud;
mod render;

pub use camera::camera_follow_system;
pub use controller::{
    intent_from_keys, keyboard_fuel_toggle_system, keyboard_intent_system, keyboard_reset_system,
};
pub use flight::{flight_step_system, reset, step};
pub use hud::{
    banner_text, hud_banner_system, hud_update_system, spawn_hud, HudBanner, HudField, HudReadout,
};
pub use render::{
    aircraft_render_system, propeller_system, render_rotation, render_translation,
    spawn_aircraft_model, spawn_scene,
};
