use arcade_flyer::{
    components::{FlightEvent, FlightState, InputIntent, PlayerController, ResetRequest},
    plugins::{drain_flight_events, run_flight_frame, FlightSimPlugin},
    resources::{FlightConfig, SimulationConfig},
};
use bevy::{ecs::event::EventCursor, prelude::*};

// Builder for creating a headless test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    intent: InputIntent,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            intent: InputIntent::idle(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_flight(mut self, config: FlightConfig) -> Self {
        self.config.flight = config;
        self
    }

    pub fn with_intent(mut self, intent: InputIntent) -> Self {
        self.intent = intent;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightSimPlugin::new(self.config))
            .insert_resource(self.intent);
        app.finish();
        app.cleanup();

        // Run an initial update so startup systems spawn the aircraft
        app.update();

        let events = app.world().resource::<Events<FlightEvent>>().get_cursor();
        TestApp { app, events }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    events: EventCursor<FlightEvent>,
}

impl TestApp {
    /// Runs `frames` flight frames and returns the events they produced
    pub fn run_frames(&mut self, frames: usize) -> Vec<FlightEvent> {
        for _ in 0..frames {
            run_flight_frame(self.app.world_mut());
        }
        self.drain_events()
    }

    pub fn run_frame(&mut self) -> Vec<FlightEvent> {
        self.run_frames(1)
    }

    pub fn drain_events(&mut self) -> Vec<FlightEvent> {
        drain_flight_events(self.app.world_mut(), &mut self.events)
    }

    pub fn set_intent(&mut self, intent: InputIntent) {
        self.app.world_mut().insert_resource(intent);
    }

    pub fn request_reset(&mut self) {
        self.app.world_mut().send_event(ResetRequest);
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn aircraft_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&FlightState, With<PlayerController>>();
        query.iter(world).count()
    }

    pub fn flight_state(&mut self) -> FlightState {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&FlightState, With<PlayerController>>();
        query
            .get_single(world)
            .expect("Player aircraft not found")
            .clone()
    }

    pub fn set_flight_state(&mut self, state: FlightState) {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&mut FlightState, With<PlayerController>>();
        *query
            .get_single_mut(world)
            .expect("Player aircraft not found") = state;
    }
}
