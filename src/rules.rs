use crate::{Cell, Grid};

/// Offsets of the Moore neighbourhood.
const NEIGHBOURHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts live cells among the up to 8 neighbours of `(row, col)`.
///
/// Edges are hard: positions outside the grid are skipped, so corner cells
/// have 3 candidates and edge cells have 5.
pub fn number_of_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    NEIGHBOURHOOD
        .iter()
        .filter_map(|&(dr, dc)| grid.cell(row + dr, col + dc))
        .filter(|c| c.is_live())
        .count() as u8
}

/// Value of `(row, col)` in the generation after `grid`.
pub fn next_cell_value(grid: &Grid, row: usize, col: usize) -> Cell {
    let neibs = number_of_neighbors(grid, row, col);
    let next = if grid.get(row, col).is_live() {
        neibs == 2 || neibs == 3
    } else {
        neibs == 3
    };
    Cell::from(next)
}

/// Computes the next generation.
///
/// The result is built into a fresh grid; every lookup reads `grid`, never
/// the partially filled result.
pub fn next_board_state(grid: &Grid) -> Grid {
    let (height, width) = (grid.height(), grid.width());
    let mut next = Grid::blank(height, width);
    for row in 0..height {
        for col in 0..width {
            next.set(row, col, next_cell_value(grid, row, col));
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid<const W: usize>(rows: &[[u8; W]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_neighbors_interior() {
        let g = grid(&[[1, 1, 1], [1, 1, 1], [1, 1, 1]]);
        assert_eq!(number_of_neighbors(&g, 1, 1), 8);
    }

    #[test]
    fn test_neighbors_clipped_at_corners_and_edges() {
        let g = grid(&[[1, 1, 1], [1, 1, 1], [1, 1, 1]]);
        assert_eq!(number_of_neighbors(&g, 0, 0), 3);
        assert_eq!(number_of_neighbors(&g, 2, 2), 3);
        assert_eq!(number_of_neighbors(&g, 0, 1), 5);
        assert_eq!(number_of_neighbors(&g, 1, 0), 5);
    }

    #[test]
    fn test_neighbors_no_wraparound() {
        // a torus would see the opposite edge here
        let g = grid(&[[1, 0, 0, 1], [0, 0, 0, 0], [1, 0, 0, 1]]);
        assert_eq!(number_of_neighbors(&g, 0, 0), 0);
        assert_eq!(number_of_neighbors(&g, 1, 0), 2);
        assert_eq!(number_of_neighbors(&g, 1, 3), 2);
    }

    #[test]
    fn test_neighbors_excludes_self() {
        let g = grid(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]);
        assert_eq!(number_of_neighbors(&g, 1, 1), 0);
        assert_eq!(number_of_neighbors(&g, 0, 0), 1);
    }

    #[test]
    fn test_next_cell_value_live() {
        for (n, expected) in [(0, 0), (1, 0), (2, 1), (3, 1), (4, 0), (5, 0), (8, 0)] {
            let mut g = Grid::blank(3, 3);
            g.set(1, 1, Cell::Live);
            let around = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
            for &(r, c) in around.iter().take(n) {
                g.set(r, c, Cell::Live);
            }
            assert_eq!(next_cell_value(&g, 1, 1) as u8, expected, "neighbours: {}", n);
        }
    }

    #[test]
    fn test_next_cell_value_dead() {
        for (n, expected) in [(0, 0), (2, 0), (3, 1), (4, 0), (6, 0)] {
            let mut g = Grid::blank(3, 3);
            let around = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
            for &(r, c) in around.iter().take(n) {
                g.set(r, c, Cell::Live);
            }
            assert_eq!(next_cell_value(&g, 1, 1) as u8, expected, "neighbours: {}", n);
        }
    }

    #[test]
    fn test_step_reads_only_previous_generation() {
        // an in-place update would let (0, 1) dying change the count seen by (1, 1)
        let g = grid(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]);
        let next = next_board_state(&g);
        assert_eq!(next.to_rows(), vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
        assert_eq!(next_board_state(&next), g);
    }

    #[test]
    fn test_step_empty_grid() {
        let g = Grid::blank(0, 0);
        assert_eq!(next_board_state(&g), g);
    }
}
