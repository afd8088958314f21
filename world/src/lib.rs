#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the hedge maze.
//!
//! A [`World`] owns everything a session needs: the carved grid, the goal,
//! the observer's position, and the session phase. Setup is the only
//! fallible stage; afterwards adapters and systems mutate the world
//! exclusively through [`apply`] and read it through [`query`]. The grid is
//! immutable once carved and may be shared freely with any number of
//! readers.

pub mod collision;
mod goal;
mod grid;

pub use grid::Grid;

use hedge_maze_core::{
    Command, Event, Goal, Position, SessionConfig, SessionPhase, SetupError, SPAWN_NODE,
    WELCOME_BANNER,
};
use rand::Rng;

/// Represents the authoritative hedge-maze session state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: SessionConfig,
    grid: Grid,
    observer: Position,
    goal: Goal,
    phase: SessionPhase,
}

impl World {
    /// Builds a session from a configuration and a seedable random source.
    ///
    /// Validates the configuration, carves the maze, and places the goal,
    /// consuming the random source for both. Reseeding with the same
    /// sequence reproduces the identical session. This is the only
    /// fallible entry point; every later command has a well-defined
    /// outcome.
    pub fn new<R: Rng>(config: SessionConfig, rng: &mut R) -> Result<Self, SetupError> {
        config.validate()?;

        let grid = Grid::carve(config.maze_size, rng);
        let goal_cell = goal::place(&grid, goal::spawn_exclusion(config.maze_size), rng)?;
        let anchor = Position::new(
            goal_cell.column() as f32 * config.cell_size,
            goal_cell.row() as f32 * config.cell_size,
        );

        Ok(Self {
            banner: WELCOME_BANNER,
            observer: spawn_position(&config),
            goal: Goal::new(goal_cell, anchor),
            phase: SessionPhase::Spawned,
            config,
            grid,
        })
    }

    fn check_goal(&mut self, out_events: &mut Vec<Event>) {
        if self.phase != SessionPhase::Exploring {
            return;
        }
        if self.observer.distance_to(self.goal.anchor()) < self.config.goal_reach_distance {
            self.phase = SessionPhase::GoalReached;
            out_events.push(Event::GoalReached {
                cell: self.goal.cell(),
            });
        }
    }
}

/// World position the observer occupies at session start: the center of
/// the spawn node cell.
fn spawn_position(config: &SessionConfig) -> Position {
    let center = |coord: u32| (coord as f32 + 0.5) * config.cell_size;
    Position::new(center(SPAWN_NODE.column()), center(SPAWN_NODE.row()))
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
            if world.phase == SessionPhase::Spawned {
                world.phase = SessionPhase::Exploring;
                out_events.push(Event::ExplorationStarted);
            }
            world.check_goal(out_events);
        }
        Command::Displace { dx, dz } => {
            let from = world.observer;
            let cell_size = world.config.cell_size;
            let radius = world.config.body_radius;

            // Axis-separated resolution, X first against the original Z,
            // then Z against the already-updated X. The ordering is what
            // turns a diagonal push into sliding along the open axis.
            let mut x = from.x();
            let x_probe = Position::new(from.x() + dx, from.z());
            if !collision::is_blocked(&world.grid, cell_size, radius, x_probe) {
                x = from.x() + dx;
            }
            let mut z = from.z();
            let z_probe = Position::new(x, from.z() + dz);
            if !collision::is_blocked(&world.grid, cell_size, radius, z_probe) {
                z = from.z() + dz;
            }

            let to = Position::new(x, z);
            if to != from {
                world.observer = to;
                out_events.push(Event::ObserverMoved { from, to });
                world.check_goal(out_events);
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use hedge_maze_core::{CellCoord, CellState, Goal, Position, SessionConfig, SessionPhase};

    use super::{collision, Grid, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Captures a read-only view of the carved maze grid.
    #[must_use]
    pub fn grid(world: &World) -> GridView<'_> {
        GridView { grid: &world.grid }
    }

    /// Current continuous-space position of the observer.
    #[must_use]
    pub fn observer(world: &World) -> Position {
        world.observer
    }

    /// Goal cell and its continuous-space anchor.
    #[must_use]
    pub fn goal(world: &World) -> Goal {
        world.goal
    }

    /// Current lifecycle phase of the session.
    #[must_use]
    pub fn phase(world: &World) -> SessionPhase {
        world.phase
    }

    /// Win-state signal for presenters; true once the session is over.
    #[must_use]
    pub fn goal_reached(world: &World) -> bool {
        world.phase == SessionPhase::GoalReached
    }

    /// Configuration the session was built from.
    #[must_use]
    pub fn config(world: &World) -> &SessionConfig {
        &world.config
    }

    /// Resolves a collision query for the observer's body at `position`.
    ///
    /// Total over the whole plane; out-of-bounds positions are blocked.
    #[must_use]
    pub fn is_blocked(world: &World, position: Position) -> bool {
        collision::is_blocked(
            &world.grid,
            world.config.cell_size,
            world.config.body_radius,
            position,
        )
    }

    /// Read-only view of the carved maze grid.
    #[derive(Clone, Copy, Debug)]
    pub struct GridView<'a> {
        grid: &'a Grid,
    }

    impl<'a> GridView<'a> {
        /// Number of cells along each edge of the square grid.
        #[must_use]
        pub fn size(&self) -> u32 {
            self.grid.size()
        }

        /// State of the provided cell, if it lies within the grid.
        #[must_use]
        pub fn state(&self, cell: CellCoord) -> Option<CellState> {
            self.grid.state(cell)
        }

        /// Reports whether the cell blocks the observer; out-of-bounds
        /// cells count as walls.
        #[must_use]
        pub fn is_wall(&self, cell: CellCoord) -> bool {
            self.grid.is_wall(cell)
        }

        /// Iterates every cell in row-major order with its state.
        pub fn cells(&self) -> impl Iterator<Item = (CellCoord, CellState)> + 'a {
            let grid = self.grid;
            (0..grid.size()).flat_map(move |row| {
                (0..grid.size()).map(move |column| {
                    let cell = CellCoord::new(column, row);
                    (cell, grid.state(cell).unwrap_or(CellState::Wall))
                })
            })
        }
    }
}
