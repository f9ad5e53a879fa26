// patterns.rs - Seed patterns and random fill.

use rand::Rng;

use crate::grid::{CellGrid, GRID_HEIGHT, GRID_WIDTH};

/// A named set of cells to place on the board, as (col, row) pairs.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Activates the pattern's cells, leaving the rest of the board alone.
    pub fn stamp(&self, grid: &mut CellGrid) {
        for &(col, row) in self.cells {
            grid.activate(col, row);
        }
    }

    /// Replaces the board contents with this pattern and resets the
    /// generation counter.
    pub fn load(&self, grid: &mut CellGrid) {
        grid.clear();
        self.stamp(grid);
    }
}

/// The startup seed, placed near the center of the board. Five cells with a
/// famously long, chaotic evolution.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(100, 73), (101, 73), (99, 74), (100, 74), (100, 75)],
};

/// Loadable via the number keys, in order.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(6, 5), (7, 6), (5, 7), (6, 7), (7, 7)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(100, 74), (100, 75), (100, 76)],
    },
    Pattern {
        name: "Toad",
        cells: &[(100, 75), (101, 75), (102, 75), (99, 76), (100, 76), (101, 76)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (60, 60),
            (61, 60),
            (60, 61),
            (61, 61),
            (62, 62),
            (63, 62),
            (62, 63),
            (63, 63),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            // Left block
            (11, 15),
            (12, 15),
            (11, 16),
            (12, 16),
            // Left ship
            (21, 15),
            (21, 16),
            (21, 17),
            (22, 14),
            (22, 18),
            (23, 13),
            (23, 19),
            (24, 13),
            (24, 19),
            (25, 16),
            (26, 14),
            (26, 18),
            (27, 15),
            (27, 16),
            (27, 17),
            (28, 16),
            // Right ship
            (31, 13),
            (31, 14),
            (31, 15),
            (32, 13),
            (32, 14),
            (32, 15),
            (33, 12),
            (33, 16),
            (35, 11),
            (35, 12),
            (35, 16),
            (35, 17),
            // Right block
            (45, 13),
            (45, 14),
            (46, 13),
            (46, 14),
        ],
    },
];

/// Clears the board, then brings roughly a third of the cells to life.
/// Generation resets to 0 along with the clear.
pub fn random_fill(grid: &mut CellGrid) {
    let mut rng = rand::thread_rng();
    grid.clear();
    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            if rng.gen_bool(1.0 / 3.0) {
                grid.activate(col, row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellGrid;

    #[test]
    fn all_pattern_cells_are_in_bounds() {
        let patterns = PATTERNS.iter().chain(std::iter::once(&R_PENTOMINO));
        for pattern in patterns {
            for &(col, row) in pattern.cells {
                assert!(
                    (0..GRID_WIDTH).contains(&col) && (0..GRID_HEIGHT).contains(&row),
                    "{} has out-of-bounds cell ({col},{row})",
                    pattern.name
                );
            }
        }
    }

    #[test]
    fn r_pentomino_stamps_five_cells() {
        let mut grid = CellGrid::empty();
        R_PENTOMINO.stamp(&mut grid);
        assert_eq!(grid.live_cells().len(), 5);
    }

    #[test]
    fn load_replaces_previous_contents() {
        let mut grid = CellGrid::empty();
        grid.toggle_pause();
        grid.activate(0, 0);
        grid.advance_generation();
        PATTERNS[1].load(&mut grid); // Blinker
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.live_cells().len(), 3);
    }

    #[test]
    fn random_fill_populates_and_resets() {
        let mut grid = CellGrid::empty();
        random_fill(&mut grid);
        assert_eq!(grid.generation(), 0);
        let live = grid.live_cells().len();
        assert!(live > 0, "random fill produced an empty board");
        assert!(live < (GRID_WIDTH * GRID_HEIGHT) as usize);
    }
}
