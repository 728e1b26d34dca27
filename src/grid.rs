use crate::{Error, Result};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Live = 1,
}

impl Cell {
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Live),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Dead),
            '1' => Some(Cell::Live),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(live: bool) -> Self {
        if live {
            Cell::Live
        } else {
            Cell::Dead
        }
    }
}

/// Rectangular field of cells with hard edges, stored row-major.
///
/// Every constructor checks rectangularity, so any `Grid` value is well-formed:
/// `height * width` cells, each `Dead` or `Live`. A grid with no rows has width 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a grid of `height x width` dead cells.
    pub fn blank(height: usize, width: usize) -> Self {
        let width = if height == 0 { 0 } else { width };
        Self {
            cells: vec![Cell::Dead; height * width],
            height,
            width,
        }
    }

    /// Create a grid where every cell is live with probability 1/2.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(height: usize, width: usize, seed: Option<u64>) -> Self {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut grid = Self::blank(height, width);
        for cell in grid.cells.iter_mut() {
            *cell = Cell::from(rng.gen_bool(0.5));
        }
        tracing::trace!(height, width, ?seed, population = grid.population(), "random grid");
        grid
    }

    /// Build a grid from rows of `0`/`1` values.
    ///
    /// Fails if the rows differ in length or hold any other value.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_u8(value).ok_or(Error::InvalidCellValue {
                    row,
                    col,
                    found: value,
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.height && col < self.width, "({row}, {col}) is out of bounds");
        self.cells[row * self.width + col]
    }

    /// Checked lookup; coordinates past the edge give `None`.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < self.height && col < self.width, "({row}, {col}) is out of bounds");
        self.cells[row * self.width + col] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    pub fn is_dead(&self) -> bool {
        self.population() == 0
    }
}

/// All-dead grid of the given dimensions.
pub fn dead_state(height: usize, width: usize) -> Grid {
    Grid::blank(height, width)
}

/// Grid of the given dimensions with each cell independently live or dead.
pub fn random_state(height: usize, width: usize) -> Grid {
    Grid::random(height, width, None)
}
