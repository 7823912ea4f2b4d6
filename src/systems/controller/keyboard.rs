use bevy::prelude::*;

use crate::components::{InputIntent, ResetRequest};
use crate::resources::{FlightConfig, Intent, KeyBindings};

/// Samples the held keys into the intent read by the next flight step.
pub fn keyboard_intent_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut intent: ResMut<InputIntent>,
) {
    *intent = intent_from_keys(&bindings, keyboard.get_pressed());
}

/// Sends a reset request when a reset key goes down.
pub fn keyboard_reset_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut resets: EventWriter<ResetRequest>,
) {
    if just_pressed(&keyboard, &bindings, Intent::Reset) {
        resets.send(ResetRequest);
    }
}

/// Flips the solar engine when its key goes down.
pub fn keyboard_fuel_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut config: ResMut<FlightConfig>,
) {
    if just_pressed(&keyboard, &bindings, Intent::ToggleUnlimitedFuel) {
        config.unlimited_fuel = !config.unlimited_fuel;
        info!("Unlimited fuel: {}", config.unlimited_fuel);
    }
}

fn just_pressed(keyboard: &ButtonInput<KeyCode>, bindings: &KeyBindings, intent: Intent) -> bool {
    keyboard
        .get_just_pressed()
        .any(|key| bindings.intent(*key) == Some(intent))
}

/// Folds a set of held keys into an intent.
pub fn intent_from_keys<'a>(
    bindings: &KeyBindings,
    held: impl IntoIterator<Item = &'a KeyCode>,
) -> InputIntent {
    let mut intent = InputIntent::idle();
    for key in held {
        match bindings.intent(*key) {
            Some(Intent::Throttle) => intent.throttle = true,
            Some(Intent::Brake) => intent.brake = true,
            Some(Intent::PitchUp) => intent.pitch_up = true,
            Some(Intent::PitchDown) => intent.pitch_down = true,
            Some(Intent::RollLeft) => intent.roll_left = true,
            Some(Intent::RollRight) => intent.roll_right = true,
            Some(Intent::Reset | Intent::ToggleUnlimitedFuel) | None => {}
        }
    }
    intent
}
