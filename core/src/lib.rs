#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the hedge-maze engine.
//!
//! This crate defines the vocabulary that connects adapters, the
//! authoritative session world, and pure systems. Adapters submit
//! [`Command`] values describing desired mutations, the world executes
//! those commands via its `apply` entry point, and then broadcasts
//! [`Event`] values for systems and presenters to react to
//! deterministically. The session configuration and the setup-time error
//! taxonomy also live here so every crate agrees on what a valid session
//! looks like.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to the hedge maze.";

/// Node-lattice coordinate of the cell the observer spawns in.
pub const SPAWN_NODE: CellCoord = CellCoord::new(1, 1);

/// State held by a single maze grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Solid cell that blocks the observer.
    Wall,
    /// Carved cell the observer may occupy.
    Open,
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Reports whether both coordinates are odd, i.e. the cell is a maze
    /// room on the node lattice rather than a connector or border cell.
    #[must_use]
    pub const fn is_node(&self) -> bool {
        self.column % 2 == 1 && self.row % 2 == 1
    }
}

/// Axis-aligned rectangle expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRect {
    origin: CellCoord,
    size: CellRectSize,
}

impl CellRect {
    /// Constructs a rectangle from an origin cell and size.
    #[must_use]
    pub const fn from_origin_and_size(origin: CellCoord, size: CellRectSize) -> Self {
        Self { origin, size }
    }

    /// Upper-left cell that anchors the rectangle.
    #[must_use]
    pub const fn origin(&self) -> CellCoord {
        self.origin
    }

    /// Dimensions of the rectangle measured in whole cells.
    #[must_use]
    pub const fn size(&self) -> CellRectSize {
        self.size
    }

    /// Reports whether the rectangle covers the provided cell.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        let column_end = self.origin.column().saturating_add(self.size.width());
        let row_end = self.origin.row().saturating_add(self.size.height());
        cell.column() >= self.origin.column()
            && cell.column() < column_end
            && cell.row() >= self.origin.row()
            && cell.row() < row_end
    }
}

/// Size of a [`CellRect`] measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRectSize {
    width: u32,
    height: u32,
}

impl CellRectSize {
    /// Creates a new size descriptor with explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width of the rectangle in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rectangle in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// Continuous horizontal-plane location of the observer in world units.
///
/// The observer's eye height is a presentation concern; collision and
/// movement only ever read the `x`/`z` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    x: f32,
    z: f32,
}

impl Position {
    /// Creates a new position from world-unit coordinates.
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Coordinate along the world X axis.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Coordinate along the world Z axis.
    #[must_use]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Euclidean distance to another position on the horizontal plane.
    #[must_use]
    pub fn distance_to(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Per-frame snapshot of the observer's movement intents.
///
/// Key-to-intent mapping belongs to the input collaborator; the engine only
/// ever sees this snapshot, never raw key state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveIntent {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

impl MoveIntent {
    /// Creates a snapshot from the four directional intent flags.
    #[must_use]
    pub const fn new(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        Self {
            forward,
            backward,
            left,
            right,
        }
    }

    /// Snapshot with every intent flag cleared.
    #[must_use]
    pub const fn idle() -> Self {
        Self::new(false, false, false, false)
    }

    /// Reports whether any directional intent is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Signed contribution along the facing direction: forward minus backward.
    #[must_use]
    pub fn longitudinal(&self) -> f32 {
        f32::from(i8::from(self.forward) - i8::from(self.backward))
    }

    /// Signed contribution along the right-hand direction: right minus left.
    #[must_use]
    pub fn lateral(&self) -> f32 {
        f32::from(i8::from(self.right) - i8::from(self.left))
    }
}

/// Lifecycle of a maze session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Session constructed, simulation clock not yet started.
    Spawned,
    /// Observer is free to roam the maze.
    Exploring,
    /// Goal proximity threshold was crossed; terminal.
    GoalReached,
}

/// Cell chosen to hold the goal object, paired with its world anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Goal {
    cell: CellCoord,
    anchor: Position,
}

impl Goal {
    /// Creates a goal anchored at the provided cell and world position.
    #[must_use]
    pub const fn new(cell: CellCoord, anchor: Position) -> Self {
        Self { cell, anchor }
    }

    /// Grid cell that holds the goal object.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Continuous-space anchor the reach distance is measured against.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that the observer move by the provided displacement,
    /// subject to axis-separated collision resolution.
    Displace {
        /// Proposed displacement along the world X axis.
        dx: f32,
        /// Proposed displacement along the world Z axis.
        dz: f32,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that the session left the spawned phase on its first tick.
    ExplorationStarted,
    /// Confirms that the observer's position changed.
    ObserverMoved {
        /// Position occupied before the displacement was resolved.
        from: Position,
        /// Position occupied after the displacement was resolved.
        to: Position,
    },
    /// Announces that the goal proximity threshold was crossed.
    ///
    /// Fires exactly once per session; the phase is terminal afterwards.
    GoalReached {
        /// Cell that holds the goal object.
        cell: CellCoord,
    },
}

/// Recognized session options supplied by the host environment.
///
/// Serializable so adapters can load it from configuration files; missing
/// fields fall back to the defaults of the original experience.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Number of cells along each grid edge. Must be odd and at least 5.
    pub maze_size: u32,
    /// Side length of a square cell in world units.
    pub cell_size: f32,
    /// Half-width of the observer's square collision body.
    pub body_radius: f32,
    /// Observer speed in world units per second.
    pub movement_speed: f32,
    /// Distance to the goal anchor below which the session is won.
    pub goal_reach_distance: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            maze_size: 15,
            cell_size: 4.0,
            body_radius: 0.15,
            movement_speed: 15.0,
            goal_reach_distance: 1.5,
        }
    }
}

impl SessionConfig {
    /// Smallest maze size that leaves room for more than one node cell.
    pub const MIN_MAZE_SIZE: u32 = 5;

    /// Checks every recognized option, reporting the first violation.
    ///
    /// Invalid values are rejected, never silently coerced.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.maze_size < Self::MIN_MAZE_SIZE {
            return Err(ConfigurationError::MazeSizeTooSmall {
                size: self.maze_size,
            });
        }
        if self.maze_size % 2 == 0 {
            return Err(ConfigurationError::MazeSizeEven {
                size: self.maze_size,
            });
        }
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(ConfigurationError::InvalidCellSize {
                value: self.cell_size,
            });
        }
        if !(self.body_radius > 0.0) || !self.body_radius.is_finite() {
            return Err(ConfigurationError::InvalidBodyRadius {
                value: self.body_radius,
            });
        }
        if self.body_radius * 2.0 >= self.cell_size {
            return Err(ConfigurationError::BodyTooWide {
                body_radius: self.body_radius,
                cell_size: self.cell_size,
            });
        }
        if !(self.movement_speed > 0.0) || !self.movement_speed.is_finite() {
            return Err(ConfigurationError::InvalidMovementSpeed {
                value: self.movement_speed,
            });
        }
        if !(self.goal_reach_distance > 0.0) || !self.goal_reach_distance.is_finite() {
            return Err(ConfigurationError::InvalidGoalReachDistance {
                value: self.goal_reach_distance,
            });
        }
        Ok(())
    }
}

/// Reasons a session configuration is rejected at setup time.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    /// The maze size does not leave room for the node lattice.
    #[error("maze_size must be at least {}, received {size}", SessionConfig::MIN_MAZE_SIZE)]
    MazeSizeTooSmall {
        /// Provided maze size that failed validation.
        size: u32,
    },
    /// The maze size is even, which breaks the node/connector layout.
    #[error("maze_size must be odd so node cells stay on odd coordinates, received {size}")]
    MazeSizeEven {
        /// Provided maze size that failed validation.
        size: u32,
    },
    /// The cell size is zero, negative, or not a finite number.
    #[error("cell_size must be a positive finite number, received {value}")]
    InvalidCellSize {
        /// Provided cell size that failed validation.
        value: f32,
    },
    /// The body radius is zero, negative, or not a finite number.
    #[error("body_radius must be a positive finite number, received {value}")]
    InvalidBodyRadius {
        /// Provided body radius that failed validation.
        value: f32,
    },
    /// The body cannot pass through a one-cell opening.
    #[error("body of half-width {body_radius} cannot fit a {cell_size}-unit cell opening")]
    BodyTooWide {
        /// Provided body radius that failed validation.
        body_radius: f32,
        /// Cell size the body was checked against.
        cell_size: f32,
    },
    /// The movement speed is zero, negative, or not a finite number.
    #[error("movement_speed must be a positive finite number, received {value}")]
    InvalidMovementSpeed {
        /// Provided movement speed that failed validation.
        value: f32,
    },
    /// The goal reach distance is zero, negative, or not a finite number.
    #[error("goal_reach_distance must be a positive finite number, received {value}")]
    InvalidGoalReachDistance {
        /// Provided goal reach distance that failed validation.
        value: f32,
    },
}

/// Reasons goal placement can fail during session setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The bounded sampling loop found no open cell outside the exclusion
    /// zone. Signals a configuration/exclusion mismatch, not a runtime
    /// fault.
    #[error("no goal cell found after {attempts} placement attempts")]
    Exhausted {
        /// Number of uniform samples drawn before giving up.
        attempts: u32,
    },
}

/// Failures that abort session setup.
///
/// Setup is the only fallible stage; once a world exists, commands never
/// fail.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SetupError {
    /// The supplied configuration was rejected by the validator.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The goal could not be placed inside the carved maze.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}
