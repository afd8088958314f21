//! Maze grid carved by randomized depth-first backtracking.

use hedge_maze_core::{CellCoord, CellState, SPAWN_NODE};
use rand::Rng;

/// Immutable wall/open matrix produced once at session setup.
///
/// The open cells form a single spanning tree over the node lattice, so
/// exactly one path connects any two open cells. A one-cell wall ring
/// always encloses the maze because carving never visits border cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Carves a perfect maze of the provided edge length.
    ///
    /// The configuration validator guarantees `size` is odd and at least 5
    /// before this runs; the carve itself never fails. Output depends only
    /// on the sequence drawn from `rng`, so reseeding reproduces the
    /// identical grid.
    pub(crate) fn carve<R: Rng>(size: u32, rng: &mut R) -> Self {
        let cell_count = size as usize * size as usize;
        let mut grid = Self {
            size,
            cells: vec![CellState::Wall; cell_count],
        };

        // Explicit stack instead of recursion; a serpentine maze would
        // otherwise carve size²/4 frames deep.
        let mut stack = Vec::with_capacity(cell_count / 4);
        grid.open(SPAWN_NODE);
        stack.push(SPAWN_NODE);

        while let Some(&current) = stack.last() {
            let mut candidates = [SPAWN_NODE; 4];
            let mut count = 0;
            for (column_step, row_step) in [(0_i64, -2_i64), (0, 2), (-2, 0), (2, 0)] {
                let column = i64::from(current.column()) + column_step;
                let row = i64::from(current.row()) + row_step;
                let limit = i64::from(size) - 1;
                if column <= 0 || row <= 0 || column >= limit || row >= limit {
                    continue;
                }
                let neighbor = CellCoord::new(column as u32, row as u32);
                if grid.state(neighbor) == Some(CellState::Wall) {
                    candidates[count] = neighbor;
                    count += 1;
                }
            }

            if count == 0 {
                let _ = stack.pop();
                continue;
            }

            let next = candidates[rng.gen_range(0..count)];
            let connector = CellCoord::new(
                (current.column() + next.column()) / 2,
                (current.row() + next.row()) / 2,
            );
            grid.open(next);
            grid.open(connector);
            stack.push(next);
        }

        grid
    }

    /// Number of cells along each edge of the square grid.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// State of the provided cell, if it lies within the grid.
    #[must_use]
    pub fn state(&self, cell: CellCoord) -> Option<CellState> {
        self.index(cell).map(|offset| self.cells[offset])
    }

    /// Reports whether the cell blocks the observer; out-of-bounds cells
    /// count as walls.
    #[must_use]
    pub fn is_wall(&self, cell: CellCoord) -> bool {
        self.state(cell)
            .map_or(true, |state| state == CellState::Wall)
    }

    fn open(&mut self, cell: CellCoord) {
        if let Some(offset) = self.index(cell) {
            self.cells[offset] = CellState::Open;
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.size && cell.row() < self.size {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.size).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn carved(size: u32, seed: u64) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Grid::carve(size, &mut rng)
    }

    fn open_cells(grid: &Grid) -> Vec<CellCoord> {
        let mut cells = Vec::new();
        for row in 0..grid.size() {
            for column in 0..grid.size() {
                let cell = CellCoord::new(column, row);
                if grid.state(cell) == Some(CellState::Open) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    fn reachable_from_spawn(grid: &Grid) -> usize {
        let mut visited = vec![false; grid.size() as usize * grid.size() as usize];
        let index = |cell: CellCoord| (cell.row() * grid.size() + cell.column()) as usize;

        let mut queue = VecDeque::new();
        visited[index(SPAWN_NODE)] = true;
        queue.push_back(SPAWN_NODE);

        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            let neighbors = [
                (i64::from(cell.column()), i64::from(cell.row()) - 1),
                (i64::from(cell.column()), i64::from(cell.row()) + 1),
                (i64::from(cell.column()) - 1, i64::from(cell.row())),
                (i64::from(cell.column()) + 1, i64::from(cell.row())),
            ];
            for (column, row) in neighbors {
                if column < 0 || row < 0 {
                    continue;
                }
                let neighbor = CellCoord::new(column as u32, row as u32);
                if grid.state(neighbor) != Some(CellState::Open) {
                    continue;
                }
                if !visited[index(neighbor)] {
                    visited[index(neighbor)] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        count
    }

    #[test]
    fn border_ring_stays_solid() {
        let grid = carved(15, 7);
        let edge = grid.size() - 1;
        for coord in 0..grid.size() {
            assert!(grid.is_wall(CellCoord::new(coord, 0)));
            assert!(grid.is_wall(CellCoord::new(coord, edge)));
            assert!(grid.is_wall(CellCoord::new(0, coord)));
            assert!(grid.is_wall(CellCoord::new(edge, coord)));
        }
    }

    #[test]
    fn every_node_cell_is_carved() {
        let grid = carved(15, 7);
        for row in (1..grid.size()).step_by(2) {
            for column in (1..grid.size()).step_by(2) {
                assert_eq!(
                    grid.state(CellCoord::new(column, row)),
                    Some(CellState::Open),
                    "node ({column}, {row}) was never visited"
                );
            }
        }
    }

    #[test]
    fn open_cells_form_one_connected_component() {
        let grid = carved(15, 11);
        assert_eq!(reachable_from_spawn(&grid), open_cells(&grid).len());
    }

    #[test]
    fn open_graph_is_a_spanning_tree() {
        let grid = carved(15, 11);
        let cells = open_cells(&grid);
        let nodes = cells.iter().filter(|cell| cell.is_node()).count();
        let connectors = cells.iter().filter(|cell| !cell.is_node()).count();
        assert_eq!(
            connectors,
            nodes - 1,
            "a spanning tree over {nodes} nodes needs exactly {} edges",
            nodes - 1
        );
    }

    #[test]
    fn identical_seeds_reproduce_the_grid() {
        assert_eq!(carved(15, 42), carved(15, 42));
        assert_eq!(carved(5, 42), carved(5, 42));
    }

    #[test]
    fn five_by_five_scenario_has_fixed_landmarks() {
        let grid = carved(5, 42);
        assert_eq!(grid.state(CellCoord::new(1, 1)), Some(CellState::Open));
        assert_eq!(grid.state(CellCoord::new(3, 3)), Some(CellState::Open));
        assert_eq!(grid.state(CellCoord::new(0, 0)), Some(CellState::Wall));
        // All-even coordinates are neither rooms nor connectors.
        assert_eq!(grid.state(CellCoord::new(2, 2)), Some(CellState::Wall));
    }

    #[test]
    fn out_of_bounds_cells_read_as_walls() {
        let grid = carved(5, 42);
        assert!(grid.is_wall(CellCoord::new(5, 1)));
        assert!(grid.is_wall(CellCoord::new(1, 99)));
        assert_eq!(grid.state(CellCoord::new(5, 5)), None);
    }
}
