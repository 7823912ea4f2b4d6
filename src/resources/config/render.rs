use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub vsync: bool,
    /// Vertical field of view (degrees).
    pub fov: f32,
    pub draw_distance: f32,
    /// Side length of the square ground plane.
    pub ground_size: f32,
    pub camera: ChaseCameraConfig,
    pub hud: HudConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            vsync: true,
            fov: 75.0,
            draw_distance: 1000.0,
            ground_size: 1000.0,
            camera: ChaseCameraConfig::default(),
            hud: HudConfig::default(),
        }
    }
}

/// Camera placement relative to the aircraft body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseCameraConfig {
    /// Offset in the aircraft frame (x right, y up, z aft).
    pub offset: [f64; 3],
    /// Fraction of the remaining distance covered each frame. 1.0 snaps.
    pub smoothing: f64,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 2.0, 5.0],
            smoothing: 1.0,
        }
    }
}

/// Display scaling of the flight readouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Multiplier turning model speed into km/h-like numbers.
    pub speed_scale: f64,
    /// Multiplier turning model altitude into metre-like numbers.
    pub altitude_scale: f64,
    /// How long crash/landing messages stay on screen (s).
    pub banner_seconds: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            speed_scale: 200.0,
            altitude_scale: 10.0,
            banner_seconds: 2.0,
        }
    }
}
