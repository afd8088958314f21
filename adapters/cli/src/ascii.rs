//! ASCII projection of a carved maze for terminal display.

use hedge_maze_core::{CellCoord, SPAWN_NODE};
use hedge_maze_world::query::GridView;

/// Renders the maze as one character per cell.
///
/// Walls print as `#`, open cells as spaces, `S` marks the spawn node and
/// `G` the goal cell.
pub(crate) fn render(grid: &GridView<'_>, goal: CellCoord) -> String {
    let size = grid.size();
    let mut out = String::with_capacity((size as usize + 1) * size as usize);
    for row in 0..size {
        for column in 0..size {
            let cell = CellCoord::new(column, row);
            let glyph = if cell == SPAWN_NODE {
                'S'
            } else if cell == goal {
                'G'
            } else if grid.is_wall(cell) {
                '#'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use hedge_maze_core::SessionConfig;
    use hedge_maze_world::{query, World};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::render;

    #[test]
    fn projection_frames_the_maze_in_walls() {
        let config = SessionConfig {
            maze_size: 5,
            ..SessionConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let world = World::new(config, &mut rng).expect("session must build");

        let text = render(&query::grid(&world), query::goal(&world).cell());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "#####");
        assert_eq!(lines[4], "#####");
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('G').count(), 1);
    }
}
