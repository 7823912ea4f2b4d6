use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// What a model part does once spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    #[default]
    Body,
    /// Spins while the engine runs.
    Propeller,
}

/// One box of the procedural aircraft, in model space (y up, nose towards -z).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPart {
    pub name: String,
    /// Full extents along x, y and z.
    pub size: [f64; 3],
    /// Centre of the box relative to the aircraft origin.
    pub offset: [f64; 3],
    /// Linear RGB.
    pub color: [f32; 3],
    #[serde(default)]
    pub role: PartRole,
}

impl ModelPart {
    fn new(name: &str, size: [f64; 3], offset: [f64; 3], color: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            size,
            offset,
            color,
            role: PartRole::Body,
        }
    }

    fn propeller(mut self) -> Self {
        self.role = PartRole::Propeller;
        self
    }

    pub fn min(&self) -> Vector3<f64> {
        Vector3::from(self.offset) - Vector3::from(self.size) / 2.0
    }

    pub fn max(&self) -> Vector3<f64> {
        Vector3::from(self.offset) + Vector3::from(self.size) / 2.0
    }
}

/// Axis-aligned box enclosing a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

/// Box-built stand-in for the aircraft mesh.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftModel {
    pub parts: Vec<ModelPart>,
}

impl Default for AircraftModel {
    /// A small single-engine cartoon plane.
    fn default() -> Self {
        let hull = [0.85, 0.2, 0.15];
        let trim = [0.9, 0.9, 0.9];
        let dark = [0.1, 0.1, 0.1];
        Self {
            parts: vec![
                ModelPart::new("fuselage", [0.6, 0.6, 3.0], [0.0, 0.0, 0.0], hull),
                ModelPart::new("wing", [4.0, 0.1, 0.8], [0.0, 0.1, -0.2], trim),
                ModelPart::new("tailplane", [1.6, 0.08, 0.5], [0.0, 0.2, 1.3], trim),
                ModelPart::new("fin", [0.08, 0.6, 0.5], [0.0, 0.55, 1.3], hull),
                ModelPart::new("gear_left", [0.1, 0.5, 0.1], [-0.5, -0.5, -0.6], dark),
                ModelPart::new("gear_right", [0.1, 0.5, 0.1], [0.5, -0.5, -0.6], dark),
                ModelPart::new("propeller", [1.6, 0.12, 0.04], [0.0, 0.0, -1.55], dark)
                    .propeller(),
            ],
        }
    }
}

impl AircraftModel {
    pub fn bounds(&self) -> Option<Bounds> {
        let mut parts = self.parts.iter();
        let first = parts.next()?;
        let init = Bounds {
            min: first.min(),
            max: first.max(),
        };
        Some(parts.fold(init, |bounds, part| Bounds {
            min: bounds.min.inf(&part.min()),
            max: bounds.max.sup(&part.max()),
        }))
    }

    /// Height of the model origin when its lowest point touches the ground plane.
    pub fn ground_y(&self) -> f64 {
        self.bounds().map_or(0.0, |bounds| -bounds.min.y)
    }
}
