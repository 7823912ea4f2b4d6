use bevy::{ecs::event::EventCursor, prelude::*};
use std::time::Duration;

use crate::components::{
    AircraftModel, FlightEvent, FlightState, InputIntent, PlayerController, ResetRequest,
};
use crate::plugins::{StartupSequencePlugin, StartupStage};
use crate::resources::{FlightConfig, KeyBindings, PhysicsConfig, SimulationConfig};
use crate::systems::flight_step_system;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Pilot input is sampled into [`InputIntent`].
    Input,
    /// The flight model advances one frame.
    Step,
}

/// Flight model, its resources and the player aircraft. Needs no window.
pub struct FlightSimPlugin {
    config: SimulationConfig,
}

impl FlightSimPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Default for FlightSimPlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Plugin for FlightSimPlugin {
    fn build(&self, app: &mut App) {
        let bindings = match self.config.key_bindings() {
            Ok(bindings) => bindings,
            Err(err) => {
                warn!("{}, falling back to default key bindings", err);
                KeyBindings::default()
            }
        };

        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.insert_resource(self.config.flight.clone())
            .insert_resource(self.config.physics.clone())
            .insert_resource(self.config.render.clone())
            .insert_resource(self.config.aircraft.clone())
            .insert_resource(bindings)
            .init_resource::<InputIntent>()
            .add_event::<FlightEvent>()
            .add_event::<ResetRequest>()
            .insert_resource(Time::<Fixed>::from_hz(self.config.physics.frame_rate))
            .configure_sets(FixedUpdate, (FlightSet::Input, FlightSet::Step).chain())
            .add_systems(
                Startup,
                spawn_player_aircraft.in_set(StartupStage::BuildAircraft),
            )
            .add_systems(FixedUpdate, flight_step_system.in_set(FlightSet::Step));
    }
}

fn spawn_player_aircraft(
    mut commands: Commands,
    model: Res<AircraftModel>,
    config: Res<FlightConfig>,
    physics: Res<PhysicsConfig>,
) {
    let state = FlightState::new(model.ground_y());
    info!(
        "Spawning aircraft at ground height {:.3} ({} Hz, unlimited fuel: {})",
        state.ground_y, physics.frame_rate, config.unlimited_fuel
    );
    commands.spawn((
        state,
        PlayerController,
        Transform::default(),
        Visibility::default(),
        Name::new("Player Aircraft"),
    ));
}

/// Runs exactly one flight frame outside the main loop.
///
/// Used by the headless runner so that stepping does not depend on wall-clock time.
pub fn run_flight_frame(world: &mut World) {
    let timestep = world.resource::<PhysicsConfig>().timestep();
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f64(timestep));
    world.run_schedule(FixedUpdate);
}

/// Reads the flight events `cursor` has not seen yet, then ages the event
/// buffers so a headless loop without [`App::update`] does not keep every
/// event it ever produced.
pub fn drain_flight_events(
    world: &mut World,
    cursor: &mut EventCursor<FlightEvent>,
) -> Vec<FlightEvent> {
    let mut events = world.resource_mut::<Events<FlightEvent>>();
    let drained: Vec<FlightEvent> = cursor.read(&events).copied().collect();
    events.update();
    drained
}
