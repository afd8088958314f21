#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for hedge-maze renderers.
//!
//! The engine core never draws. Adapters read world snapshots through the
//! query surface, build the descriptors in this crate, and hand them to a
//! [`RenderingBackend`]. Everything here is data plus derivation; the
//! decisions already happened inside the world.

use std::time::Duration;

use anyhow::Result as AnyResult;
use glam::{Vec2, Vec3};
use hedge_maze_core::{CellState, Goal, Position, SessionPhase};
use hedge_maze_world::query::GridView;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Hedge foliage base color.
pub const HEDGE_GREEN: Color = Color::from_rgb_u8(0x0f, 0x3d, 0x0f);
/// Rose accents scattered across the hedge walls.
pub const ROSE_RED: Color = Color::from_rgb_u8(0xe6, 0x00, 0x5c);
/// Charcoal floor base color.
pub const FLOOR_CHARCOAL: Color = Color::from_rgb_u8(0x22, 0x22, 0x22);
/// Shell color of the goal marker.
pub const GOAL_SHELL: Color = Color::from_rgb_u8(0x33, 0x33, 0x33);
/// Label face of the goal marker.
pub const GOAL_LABEL: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
/// Magenta glow cast around the goal marker.
pub const GOAL_GLOW: Color = Color::from_rgb_u8(0xff, 0x00, 0xff);

/// Height of maze walls in world units.
pub const WALL_HEIGHT: f32 = 3.0;
/// Observer eye height in world units.
pub const EYE_HEIGHT: f32 = 1.6;

/// Static scene content derived from a finished maze.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Side length of the square floor in world units.
    pub floor_extent: f32,
    /// Edge length of one wall block's square footprint.
    pub wall_footprint: f32,
    /// Height of every wall block.
    pub wall_height: f32,
    /// Horizontal-plane center of each wall block.
    pub walls: Vec<Vec2>,
    /// Goal marker placed in the scene.
    pub goal_marker: GoalMarker,
}

impl Scene {
    /// Builds the static scene for a carved maze.
    ///
    /// Every wall cell becomes one block centered on its cell; the goal
    /// marker hovers over the goal's world anchor.
    #[must_use]
    pub fn from_session(grid: &GridView<'_>, cell_size: f32, goal: Goal) -> Self {
        let walls = grid
            .cells()
            .filter(|(_, state)| *state == CellState::Wall)
            .map(|(cell, _)| {
                Vec2::new(
                    (cell.column() as f32 + 0.5) * cell_size,
                    (cell.row() as f32 + 0.5) * cell_size,
                )
            })
            .collect();

        Self {
            floor_extent: grid.size() as f32 * cell_size,
            wall_footprint: cell_size,
            wall_height: WALL_HEIGHT,
            walls,
            goal_marker: GoalMarker::at(Vec2::new(goal.anchor().x(), goal.anchor().z())),
        }
    }
}

/// Animated goal marker hovering over its anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalMarker {
    /// Anchor on the horizontal plane.
    pub anchor: Vec2,
    /// Spin rate around the vertical axis in radians per second.
    pub spin_rate: f32,
    /// Rest height of the marker above the floor.
    pub rest_height: f32,
    /// Amplitude of the floating bob.
    pub bob_amplitude: f32,
    /// Angular frequency of the floating bob in radians per second.
    pub bob_frequency: f32,
}

impl GoalMarker {
    /// Creates a marker with the stock hover animation.
    #[must_use]
    pub const fn at(anchor: Vec2) -> Self {
        Self {
            anchor,
            spin_rate: 2.0,
            rest_height: 1.0,
            bob_amplitude: 0.2,
            bob_frequency: 5.0,
        }
    }

    /// Marker pose after `elapsed` session time.
    #[must_use]
    pub fn pose_at(&self, elapsed: Duration) -> GoalMarkerPose {
        let seconds = elapsed.as_secs_f32();
        GoalMarkerPose {
            yaw: self.spin_rate * seconds,
            height: self.rest_height + (seconds * self.bob_frequency).sin() * self.bob_amplitude,
        }
    }
}

/// Pose of the goal marker at a specific moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalMarkerPose {
    /// Rotation around the vertical axis in radians.
    pub yaw: f32,
    /// Height of the marker above the floor.
    pub height: f32,
}

/// Camera position for the observer's current location.
#[must_use]
pub fn camera_pose(observer: Position) -> Vec3 {
    Vec3::new(observer.x(), EYE_HEIGHT, observer.z())
}

/// Per-frame HUD model mirrored from session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudModel {
    /// Status line shown to the player.
    pub status_line: String,
    /// Whether the win banner should replace the status line.
    pub victory: bool,
}

impl HudModel {
    /// Derives the HUD for the current frame.
    #[must_use]
    pub fn from_state(observer: Position, phase: SessionPhase) -> Self {
        let victory = phase == SessionPhase::GoalReached;
        let status_line = if victory {
            String::from("You found the cassette! Press ESC to leave the maze.")
        } else {
            format!(
                "Pos: X={:.2}, Z={:.2}. Find the lost cassette!",
                observer.x(),
                observer.z()
            )
        };
        Self {
            status_line,
            victory,
        }
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting hedge-maze scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The `update_scene` closure receives the simulated frame delta and
    /// may mutate the scene before it is rendered, allowing adapters to
    /// animate world snapshots deterministically.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, &mut Scene) + 'static;
}
