mod readout;

use bevy::prelude::*;

use crate::components::{FlightEvent, FlightState, PlayerController};
use crate::resources::RenderConfig;

pub use readout::{banner_text, HudReadout};

/// Which readout a HUD text node shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Speed,
    Altitude,
    Fuel,
}

/// Transient message line.
#[derive(Component, Debug)]
pub struct HudBanner {
    pub timer: Timer,
}

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            Name::new("Hud"),
        ))
        .with_children(|parent| {
            for field in [HudField::Speed, HudField::Altitude, HudField::Fuel] {
                parent.spawn((
                    Text::default(),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    field,
                ));
            }
            parent.spawn((
                Text::default(),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.2)),
                HudBanner {
                    timer: Timer::from_seconds(0.0, TimerMode::Once),
                },
            ));
        });
}

pub fn hud_update_system(
    aircraft: Query<&FlightState, With<PlayerController>>,
    mut fields: Query<(&HudField, &mut Text)>,
    config: Res<RenderConfig>,
) {
    let Ok(state) = aircraft.get_single() else {
        return;
    };
    let readout = HudReadout::from_state(state, &config.hud);

    for (field, mut text) in fields.iter_mut() {
        **text = match field {
            HudField::Speed => readout.speed_text(),
            HudField::Altitude => readout.altitude_text(),
            HudField::Fuel => readout.fuel_text(),
        };
    }
}

pub fn hud_banner_system(
    mut banners: Query<(&mut HudBanner, &mut Text)>,
    mut flight_events: EventReader<FlightEvent>,
    config: Res<RenderConfig>,
    time: Res<Time>,
) {
    let latest = flight_events.read().filter_map(banner_text).last();

    for (mut banner, mut text) in banners.iter_mut() {
        if let Some(message) = latest {
            **text = message.to_string();
            banner.timer = Timer::from_seconds(config.hud.banner_seconds, TimerMode::Once);
        } else if banner.timer.tick(time.delta()).just_finished() {
            text.clear();
        }
    }
}
