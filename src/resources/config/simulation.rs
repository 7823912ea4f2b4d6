use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ConfigError, FlightConfig, PhysicsConfig, RenderConfig};
use crate::components::AircraftModel;
use crate::resources::{BindingsConfig, KeyBindings};

/// Everything the game reads at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub flight: FlightConfig,
    pub physics: PhysicsConfig,
    pub render: RenderConfig,
    pub aircraft: AircraftModel,
    pub controls: BindingsConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&file_contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Loads `path` if given, else the user config file if one exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            info!("Loading config from {}", path.display());
            return Self::load(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::load(path)
            }
            _ => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/arcade-flyer/config.yaml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arcade-flyer").join("config.yaml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flight.validate()?;
        if !(self.physics.frame_rate > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "frame_rate must be positive, got {}",
                self.physics.frame_rate
            )));
        }
        if !(self.render.camera.smoothing > 0.0 && self.render.camera.smoothing <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "camera smoothing must be in (0, 1], got {}",
                self.render.camera.smoothing
            )));
        }
        self.key_bindings()?;
        Ok(())
    }

    pub fn key_bindings(&self) -> Result<KeyBindings, ConfigError> {
        KeyBindings::from_config(&self.controls)
    }
}
