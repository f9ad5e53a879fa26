// grid.rs - The cell grid and the Life update rule.

/// Edge length of one rendered cell, in pixels.
pub const CELL_SIZE: i32 = 4;
/// Grid dimensions, in cells. The window is sized to fit exactly.
pub const GRID_WIDTH: i32 = 200;
pub const GRID_HEIGHT: i32 = 150;

// The Moore neighborhood: N, S, W, E, then the four diagonals.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

/// A (column, row) cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

/// A fixed-size, non-wrapping board of cells.
///
/// Stored as a flat row-major buffer. Positions outside the grid read as
/// [`CellState::Dead`] and are ignored on writes, so pointer-derived
/// coordinates can be passed in without pre-validation.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Vec<CellState>,
    generation: u64,
    paused: bool,
}

impl CellGrid {
    /// An all-dead grid, paused, at generation 0.
    pub fn empty() -> Self {
        Self {
            cells: vec![CellState::Dead; (GRID_WIDTH * GRID_HEIGHT) as usize],
            generation: 0,
            paused: true,
        }
    }

    /// The startup grid: empty except for the seeded R-pentomino.
    pub fn new() -> Self {
        let mut grid = Self::empty();
        crate::patterns::R_PENTOMINO.stamp(&mut grid);
        grid
    }

    fn index(col: i32, row: i32) -> Option<usize> {
        if (0..GRID_WIDTH).contains(&col) && (0..GRID_HEIGHT).contains(&row) {
            Some((row * GRID_WIDTH + col) as usize)
        } else {
            None
        }
    }

    pub fn state(&self, col: i32, row: i32) -> CellState {
        Self::index(col, row).map_or(CellState::Dead, |i| self.cells[i])
    }

    pub fn activate(&mut self, col: i32, row: i32) {
        if let Some(i) = Self::index(col, row) {
            self.cells[i] = CellState::Alive;
        }
    }

    pub fn kill(&mut self, col: i32, row: i32) {
        if let Some(i) = Self::index(col, row) {
            self.cells[i] = CellState::Dead;
        }
    }

    /// Kills every cell and resets the generation counter.
    ///
    /// Deliberately does not re-seed the startup pattern.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
        self.generation = 0;
    }

    /// Live cells in the Moore neighborhood of (col, row), 0..=8.
    /// Positions beyond the edge count as dead; the board does not wrap.
    pub fn live_neighbors(&self, col: i32, row: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dc, dr)| self.state(col + dc, row + dr) == CellState::Alive)
            .count() as u8
    }

    /// Advances one generation, unless paused.
    pub fn advance_generation(&mut self) {
        if self.paused {
            return;
        }
        self.step();
    }

    /// One rule application, regardless of the paused flag.
    ///
    /// Two-pass: every next state is computed from the current generation
    /// before any is committed, so partially-updated cells never leak into
    /// neighbor counts.
    pub fn step(&mut self) {
        let mut next = vec![CellState::Dead; self.cells.len()];
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let alive = self.state(col, row) == CellState::Alive;
                next[(row * GRID_WIDTH + col) as usize] =
                    match (alive, self.live_neighbors(col, row)) {
                        (true, 2) | (true, 3) => CellState::Alive, // survival
                        (false, 3) => CellState::Alive,            // birth
                        _ => CellState::Dead,                      // dies or stays dead
                    };
            }
        }
        self.cells = next;
        self.generation += 1;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every currently live cell, row-major.
    pub fn live_cells(&self) -> Vec<GridPos> {
        (0..GRID_HEIGHT)
            .flat_map(|row| (0..GRID_WIDTH).map(move |col| GridPos { col, row }))
            .filter(|p| self.state(p.col, p.row) == CellState::Alive)
            .collect()
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}
