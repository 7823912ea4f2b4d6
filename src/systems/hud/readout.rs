use crate::components::{FlightEvent, FlightState, ResetCause};
use crate::resources::HudConfig;

/// Numbers shown on the HUD for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudReadout {
    pub speed: f64,
    pub altitude: f64,
    pub fuel: f64,
}

impl HudReadout {
    pub fn from_state(state: &FlightState, config: &HudConfig) -> Self {
        Self {
            speed: state.speed * config.speed_scale,
            altitude: state.altitude() * config.altitude_scale,
            fuel: state.fuel,
        }
    }

    pub fn speed_text(&self) -> String {
        format!("Speed: {:.1} km/h", self.speed)
    }

    pub fn altitude_text(&self) -> String {
        format!("Altitude: {:.1} m", self.altitude)
    }

    pub fn fuel_text(&self) -> String {
        format!("Fuel: {:.1}", self.fuel)
    }
}

/// Banner text for events worth telling the player about.
pub fn banner_text(event: &FlightEvent) -> Option<&'static str> {
    match event {
        FlightEvent::Crashed { .. } => Some("Crashed!"),
        FlightEvent::FuelExhausted => Some("Out of fuel!"),
        FlightEvent::Landed { .. } => Some("Landed"),
        FlightEvent::Reset(ResetCause::Requested) => Some("Reset"),
        FlightEvent::TookOff { .. } | FlightEvent::Reset(_) => None,
    }
}
