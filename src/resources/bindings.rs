use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::resources::config::ConfigError;

/// Named pilot intents, independent of the physical keys that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Throttle,
    Brake,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    /// Put the aircraft back on the runway. Edge triggered.
    Reset,
    /// Switch the solar engine on or off. Edge triggered.
    ToggleUnlimitedFuel,
}

/// Key names per intent, as written in the config file.
pub type BindingsConfig = BTreeMap<Intent, Vec<String>>;

/// Lookup table from physical keys to intents.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, Intent>,
}

impl Default for KeyBindings {
    /// W/A/S/D positions, which read Z/Q/S/D on an AZERTY keyboard, plus the arrows.
    fn default() -> Self {
        Self::empty()
            .with(KeyCode::KeyW, Intent::Throttle)
            .with(KeyCode::KeyS, Intent::Brake)
            .with(KeyCode::KeyA, Intent::RollLeft)
            .with(KeyCode::KeyD, Intent::RollRight)
            .with(KeyCode::ArrowUp, Intent::PitchUp)
            .with(KeyCode::ArrowDown, Intent::PitchDown)
            .with(KeyCode::KeyR, Intent::Reset)
            .with(KeyCode::KeyF, Intent::ToggleUnlimitedFuel)
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    pub fn with(mut self, key: KeyCode, intent: Intent) -> Self {
        self.bind(key, intent);
        self
    }

    /// Binds `key` to `intent`, replacing whatever the key did before.
    pub fn bind(&mut self, key: KeyCode, intent: Intent) {
        self.keys.insert(key, intent);
    }

    pub fn intent(&self, key: KeyCode) -> Option<Intent> {
        self.keys.get(&key).copied()
    }

    /// All keys bound to `intent`.
    pub fn keys_for(&self, intent: Intent) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys
            .iter()
            .filter(move |(_, bound)| **bound == intent)
            .map(|(key, _)| *key)
    }

    /// Builds a table from config. Intents missing from `config` keep their default keys.
    pub fn from_config(config: &BindingsConfig) -> Result<Self, ConfigError> {
        let mut bindings = Self::default();
        for (intent, names) in config {
            let defaults: Vec<KeyCode> = bindings.keys_for(*intent).collect();
            for key in defaults {
                bindings.keys.remove(&key);
            }
            for name in names {
                let key = parse_key(name).ok_or_else(|| ConfigError::UnknownKey(name.clone()))?;
                bindings.bind(key, *intent);
            }
        }
        Ok(bindings)
    }
}

/// Parses a key from its `KeyCode` variant name, e.g. `"KeyW"` or `"ArrowUp"`.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    Some(match name {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        _ => return None,
    })
}
