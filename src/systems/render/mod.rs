mod aircraft;
mod scene;

pub use aircraft::{
    aircraft_render_system, propeller_system, render_rotation, render_translation,
    spawn_aircraft_model,
};
pub use scene::spawn_scene;
