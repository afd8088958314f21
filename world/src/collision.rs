//! Grid collision queries for the observer's square body.

use hedge_maze_core::{CellCoord, Position};

use crate::grid::Grid;

/// Decides whether the observer's body may occupy `position`.
///
/// The body is a square of half-width `body_radius` centered on the
/// position, and all four of its corners are sampled. A single-point check
/// would let the body's edges tunnel through a wall corner on diagonal
/// motion; four corners with a small radius close that gap while still
/// fitting through one-cell openings. Corners mapping outside the grid
/// block, so the query is total over the whole plane and never fails.
#[must_use]
pub fn is_blocked(grid: &Grid, cell_size: f32, body_radius: f32, position: Position) -> bool {
    let corners = [
        (position.x() - body_radius, position.z() - body_radius),
        (position.x() + body_radius, position.z() - body_radius),
        (position.x() - body_radius, position.z() + body_radius),
        (position.x() + body_radius, position.z() + body_radius),
    ];

    corners
        .into_iter()
        .any(|(x, z)| corner_blocked(grid, cell_size, x, z))
}

fn corner_blocked(grid: &Grid, cell_size: f32, x: f32, z: f32) -> bool {
    let column = (x / cell_size).floor();
    let row = (z / cell_size).floor();
    if column < 0.0 || row < 0.0 {
        return true;
    }
    // Casts saturate, so coordinates past u32::MAX still land out of
    // bounds and read as walls.
    grid.is_wall(CellCoord::new(column as u32, row as u32))
}
