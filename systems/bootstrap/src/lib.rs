#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the hedge-maze experience.

use hedge_maze_core::{Goal, Position};
use hedge_maze_world::{
    query::{self, GridView},
    World,
};

/// Produces the data an adapter needs on its very first frame.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Exposes the carved grid required for building the wall scene.
    #[must_use]
    pub fn grid<'world>(&self, world: &'world World) -> GridView<'world> {
        query::grid(world)
    }

    /// Spawn position the camera starts from.
    #[must_use]
    pub fn spawn(&self, world: &World) -> Position {
        query::observer(world)
    }

    /// Goal placement for the win-state presentation.
    #[must_use]
    pub fn goal(&self, world: &World) -> Goal {
        query::goal(world)
    }
}
