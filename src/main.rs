use bevy::{log::LogPlugin, prelude::*, window::PresentMode};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use arcade_flyer::{
    components::{FlightEvent, FlightState, InputIntent, PlayerController},
    plugins::{
        drain_flight_events, run_flight_frame, CameraPlugin, ControlsPlugin, FlightSimPlugin,
        HudPlugin, ScenePlugin,
    },
    resources::SimulationConfig,
};

#[derive(Parser, Debug)]
#[command(name = "arcade_flyer", about = "Arcade flying game")]
struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Never burn fuel.
    #[arg(long, global = true)]
    unlimited_fuel: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Fly with the keyboard (default).
    Play,
    /// Run the flight model without a window and print the state as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Number of frames to run.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Print the state every N frames. Frames with events are always printed.
    #[arg(long, default_value_t = 60)]
    every: u64,

    #[arg(long)]
    throttle: bool,
    #[arg(long)]
    brake: bool,
    #[arg(long)]
    pitch_up: bool,
    #[arg(long)]
    pitch_down: bool,
    #[arg(long)]
    roll_left: bool,
    #[arg(long)]
    roll_right: bool,
}

impl SimulateArgs {
    fn intent(&self) -> InputIntent {
        InputIntent {
            throttle: self.throttle,
            brake: self.brake,
            pitch_up: self.pitch_up,
            pitch_down: self.pitch_down,
            roll_left: self.roll_left,
            roll_right: self.roll_right,
        }
    }
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    state: &'a FlightState,
    events: &'a [FlightEvent],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = SimulationConfig::discover(cli.config.as_deref())?;
    if cli.unlimited_fuel {
        config.flight.unlimited_fuel = true;
    }

    match cli.mode.unwrap_or(Mode::Play) {
        Mode::Play => play(config),
        Mode::Simulate(args) => simulate(config, &args)?,
    }
    Ok(())
}

fn play(config: SimulationConfig) {
    let window = Window {
        title: "Arcade Flyer".to_string(),
        resolution: (
            config.render.screen_width as f32,
            config.render.screen_height as f32,
        )
            .into(),
        present_mode: if config.render.vsync {
            PresentMode::AutoVsync
        } else {
            PresentMode::AutoNoVsync
        },
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins((
            FlightSimPlugin::new(config),
            ControlsPlugin,
            ScenePlugin,
            CameraPlugin,
            HudPlugin,
        ))
        .run();
}

fn simulate(
    config: SimulationConfig,
    args: &SimulateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(FlightSimPlugin::new(config))
        .insert_resource(args.intent());
    app.finish();
    app.cleanup();
    // Startup only.
    app.update();

    let mut cursor = app.world().resource::<Events<FlightEvent>>().get_cursor();
    let every = args.every.max(1);

    for frame in 1..=args.frames {
        run_flight_frame(app.world_mut());

        let events = drain_flight_events(app.world_mut(), &mut cursor);

        if frame % every == 0 || !events.is_empty() {
            let world = app.world_mut();
            let state = world
                .query_filtered::<&FlightState, With<PlayerController>>()
                .get_single(world)?;
            let record = FrameRecord {
                frame,
                state,
                events: &events,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }
    Ok(())
}
