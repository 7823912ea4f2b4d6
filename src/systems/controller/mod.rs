mod keyboard;

pub use keyboard::{
    intent_from_keys, keyboard_fuel_toggle_system, keyboard_intent_system, keyboard_reset_system,
};
