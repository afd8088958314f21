//! Goal placement inside the carved maze.

use hedge_maze_core::{CellCoord, CellRect, CellRectSize, CellState, PlacementError};
use rand::Rng;

use crate::grid::Grid;

/// Upper bound on uniform samples before placement gives up.
const ATTEMPT_LIMIT: u32 = 10_000;

/// Edge length of the square spawn exclusion zone in cells.
const SPAWN_EXCLUSION_CELLS: u32 = 4;

/// Rectangular zone around the spawn corner the goal must stay out of,
/// keeping it from landing trivially close to the start.
///
/// Clamped for small mazes so at least one node cell stays eligible.
pub(crate) fn spawn_exclusion(maze_size: u32) -> CellRect {
    let extent = SPAWN_EXCLUSION_CELLS.min(maze_size.saturating_sub(2));
    CellRect::from_origin_and_size(CellCoord::new(0, 0), CellRectSize::new(extent, extent))
}

/// Samples cells uniformly until one is open and outside the exclusion
/// zone.
///
/// The attempt bound turns degenerate geometry into an error instead of an
/// endless loop; ordinary configurations never come close to it.
pub(crate) fn place<R: Rng>(
    grid: &Grid,
    exclusion: CellRect,
    rng: &mut R,
) -> Result<CellCoord, PlacementError> {
    for _ in 0..ATTEMPT_LIMIT {
        let column = rng.gen_range(0..grid.size());
        let row = rng.gen_range(0..grid.size());
        let cell = CellCoord::new(column, row);
        if grid.state(cell) == Some(CellState::Open) && !exclusion.contains(cell) {
            return Ok(cell);
        }
    }

    Err(PlacementError::Exhausted {
        attempts: ATTEMPT_LIMIT,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn carved(size: u32, seed: u64) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Grid::carve(size, &mut rng)
    }

    #[test]
    fn placed_goal_is_open_and_outside_the_exclusion_zone() {
        let grid = carved(15, 3);
        let exclusion = spawn_exclusion(grid.size());
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let cell = place(&grid, exclusion, &mut rng).expect("placement must succeed");

        assert_eq!(grid.state(cell), Some(CellState::Open));
        assert!(!exclusion.contains(cell));
    }

    #[test]
    fn placement_is_deterministic_for_identical_sequences() {
        let grid = carved(15, 9);
        let exclusion = spawn_exclusion(grid.size());

        let first = place(&grid, exclusion, &mut ChaCha8Rng::seed_from_u64(9));
        let second = place(&grid, exclusion, &mut ChaCha8Rng::seed_from_u64(9));

        assert_eq!(first, second);
    }

    #[test]
    fn exclusion_covering_the_grid_exhausts_the_attempt_bound() {
        let grid = carved(5, 42);
        let everything =
            CellRect::from_origin_and_size(CellCoord::new(0, 0), CellRectSize::new(5, 5));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(
            place(&grid, everything, &mut rng),
            Err(PlacementError::Exhausted {
                attempts: ATTEMPT_LIMIT
            })
        );
    }

    #[test]
    fn exclusion_zone_is_clamped_for_small_mazes() {
        let zone = spawn_exclusion(5);
        assert_eq!(zone.size().width(), 3);
        assert!(!zone.contains(CellCoord::new(3, 3)));

        let zone = spawn_exclusion(15);
        assert_eq!(zone.size().width(), 4);
        assert!(zone.contains(CellCoord::new(3, 3)));
    }
}
