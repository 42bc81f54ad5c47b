//! TerraStream headless driver
//!
//! Runs a fixed number of simulation ticks: streams chunks around the player,
//! walks in one direction and reports what the renderer would have drawn.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use terrastream::utils::settings::{default_settings_path, load_settings, save_settings};
use terrastream::{BlockKind, EngineSettings, InputState, InstanceTally, Session};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Walk {
    Forward,
    Backward,
    Left,
    Right,
}

/// Streaming voxel terrain simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (overrides loaded settings)
    #[arg(long)]
    seed: Option<u32>,

    /// View radius in chunks (overrides loaded settings)
    #[arg(long)]
    radius: Option<i32>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Settings file to load instead of the per-user default
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings to this file before running
    #[arg(long)]
    write_settings: Option<PathBuf>,

    /// Direction to hold during the run
    #[arg(long, value_enum)]
    walk: Option<Walk>,

    /// Press jump every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    jump_every: u32,
}

fn resolve_settings(args: &Args) -> Result<EngineSettings, Box<dyn std::error::Error>> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => match default_settings_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::info!("Using settings from {}", path.display());
                load_settings(&path)?
            }
            None => EngineSettings::default(),
        },
    };

    if let Some(seed) = args.seed {
        settings.world.seed = seed;
    }
    if let Some(radius) = args.radius {
        settings.world.view_radius = radius;
    }
    settings.validate()?;
    Ok(settings)
}

fn held_input(walk: Option<Walk>) -> InputState {
    let mut input = InputState::default();
    match walk {
        Some(Walk::Forward) => input.forward = true,
        Some(Walk::Backward) => input.backward = true,
        Some(Walk::Left) => input.left = true,
        Some(Walk::Right) => input.right = true,
        None => {}
    }
    input
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;

    if let Some(path) = &args.write_settings {
        save_settings(path, &settings)?;
        tracing::info!("Settings written to {}", path.display());
    }

    let mut session = Session::new(settings)?;
    let mut tally = InstanceTally::default();
    let held = held_input(args.walk);

    tracing::info!("Simulating {} ticks at dt = {:.4}s", args.ticks, args.dt);
    for tick in 0..args.ticks {
        let input = InputState {
            jump: args.jump_every > 0 && tick % args.jump_every == 0,
            ..held
        };
        let delta = session.tick(args.dt, &input, &mut tally);
        if !delta.is_empty() {
            let p = session.player_position();
            tracing::debug!(
                "Tick {}: player at ({:.2}, {:.2}, {:.2})",
                tick,
                p.x,
                p.y,
                p.z
            );
        }
    }

    let p = session.player_position();
    tracing::info!(
        "Finished at ({:.2}, {:.2}, {:.2}), {:?}, {} chunks resident",
        p.x,
        p.y,
        p.z,
        session.motion_state(),
        session.store().len()
    );
    tracing::info!(
        "Instances: {} total, {} grass, {} sand, {} water, {} wood, {} leaves ({} loads, {} unloads)",
        tally.total(),
        tally.count(BlockKind::Grass),
        tally.count(BlockKind::Sand),
        tally.count(BlockKind::Water),
        tally.count(BlockKind::Wood),
        tally.count(BlockKind::Leaves),
        tally.loads,
        tally.unloads
    );
    Ok(())
}
