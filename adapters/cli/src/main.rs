#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots a hedge-maze session.
//!
//! Carves a maze from a seed, prints an ASCII projection, and can drive a
//! short scripted wander through the movement system to demonstrate
//! collision and sliding without a 3D frontend.

mod ascii;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use glam::Vec3;
use hedge_maze_core::{Command, Event, MoveIntent, Position, SessionConfig};
use hedge_maze_rendering::Scene;
use hedge_maze_system_bootstrap::Bootstrap;
use hedge_maze_system_movement::{Movement, ObserverInput};
use hedge_maze_world::{self as world, query, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Command-line options understood by the hedge-maze binary.
#[derive(Debug, Parser)]
#[command(
    name = "hedge-maze",
    about = "Carve a hedge maze and wander it from the terminal"
)]
struct Options {
    /// Seed for maze carving and goal placement.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Path to a TOML session configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of cells along each maze edge (odd, at least 5).
    #[arg(long)]
    maze_size: Option<u32>,
    /// Side length of a cell in world units.
    #[arg(long)]
    cell_size: Option<f32>,
    /// Half-width of the observer's collision body.
    #[arg(long)]
    body_radius: Option<f32>,
    /// Observer speed in world units per second.
    #[arg(long)]
    movement_speed: Option<f32>,
    /// Distance to the goal anchor that wins the session.
    #[arg(long)]
    goal_reach_distance: Option<f32>,
    /// Frames of random wandering to simulate after setup.
    #[arg(long, default_value_t = 0)]
    wander: u32,
    /// Probe a world position ("X,Z") against the collision resolver.
    #[arg(long)]
    probe: Option<String>,
}

/// Entry point for the hedge-maze command-line interface.
fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    let config = session_config(&options)?;

    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut world =
        World::new(config, &mut rng).context("failed to set up the maze session")?;

    let bootstrap = Bootstrap::default();
    let goal = bootstrap.goal(&world);
    println!("{}", bootstrap.welcome_banner(&world));
    print!("{}", ascii::render(&bootstrap.grid(&world), goal.cell()));

    let scene = Scene::from_session(&bootstrap.grid(&world), config.cell_size, goal);
    println!(
        "maze {size}x{size}, seed {seed}, goal at ({column}, {row}), {walls} wall blocks",
        size = config.maze_size,
        seed = options.seed,
        column = goal.cell().column(),
        row = goal.cell().row(),
        walls = scene.walls.len(),
    );

    if let Some(probe) = options.probe.as_deref() {
        let position = parse_position(probe)?;
        let verdict = if query::is_blocked(&world, position) {
            "blocked"
        } else {
            "open"
        };
        println!(
            "probe ({:.2}, {:.2}): {verdict}",
            position.x(),
            position.z()
        );
    }

    if options.wander > 0 {
        wander(&mut world, options.wander, &mut rng);
    }

    Ok(())
}

/// Loads the TOML configuration when given, then applies flag overrides.
fn session_config(options: &Options) -> anyhow::Result<SessionConfig> {
    let mut config = match options.config.as_deref() {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(maze_size) = options.maze_size {
        config.maze_size = maze_size;
    }
    if let Some(cell_size) = options.cell_size {
        config.cell_size = cell_size;
    }
    if let Some(body_radius) = options.body_radius {
        config.body_radius = body_radius;
    }
    if let Some(movement_speed) = options.movement_speed {
        config.movement_speed = movement_speed;
    }
    if let Some(goal_reach_distance) = options.goal_reach_distance {
        config.goal_reach_distance = goal_reach_distance;
    }

    Ok(config)
}

fn parse_position(text: &str) -> anyhow::Result<Position> {
    let Some((x, z)) = text.split_once(',') else {
        bail!("expected a probe of the form \"X,Z\", received {text:?}");
    };
    Ok(Position::new(
        x.trim().parse().context("probe X is not a number")?,
        z.trim().parse().context("probe Z is not a number")?,
    ))
}

/// Drives the session with a randomly retargeted forward walk and reports
/// how the collision resolver treated it.
fn wander<R: Rng>(world: &mut World, frames: u32, rng: &mut R) {
    const FRAME: Duration = Duration::from_millis(16);
    const RETARGET_INTERVAL: u32 = 24;
    const HEADINGS: [Vec3; 4] = [Vec3::NEG_Z, Vec3::Z, Vec3::X, Vec3::NEG_X];

    let mut movement = Movement::default();
    let speed = query::config(world).movement_speed;
    let mut facing = Vec3::NEG_Z;
    let mut moved = 0_u32;
    let mut blocked = 0_u32;

    for frame in 0..frames {
        if frame % RETARGET_INTERVAL == 0 {
            facing = HEADINGS[rng.gen_range(0..HEADINGS.len())];
        }

        let mut tick_events = Vec::new();
        world::apply(world, Command::Tick { dt: FRAME }, &mut tick_events);

        let input = ObserverInput::new(MoveIntent::new(true, false, false, false), facing);
        let mut commands = Vec::new();
        movement.handle(&tick_events, &input, speed, &mut commands);

        for command in commands {
            let mut events = Vec::new();
            world::apply(world, command, &mut events);
            if events
                .iter()
                .any(|event| matches!(event, Event::ObserverMoved { .. }))
            {
                moved += 1;
            } else {
                blocked += 1;
            }
            if events
                .iter()
                .any(|event| matches!(event, Event::GoalReached { .. }))
            {
                println!("stumbled onto the goal at frame {frame}");
            }
        }
    }

    let last = query::observer(world);
    println!(
        "wandered {frames} frames: {moved} moved, {blocked} blocked, ending at ({:.2}, {:.2}), goal reached: {}",
        last.x(),
        last.z(),
        query::goal_reached(world)
    );
}
