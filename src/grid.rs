use std::fmt;

use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::cell::Cell;

/// Offsets of the Moore neighborhood, `(dx, dy)`, excluding the center.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("Grid of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },
}

/// Non-negative modulo. Maps any `v` into `0..n`, so that `-1` is `n - 1`.
///
/// `n` must be positive, which [`Grid::new`] guarantees for both dimensions.
pub fn wrap(v: isize, n: usize) -> usize {
    v.rem_euclid(n as isize) as usize
}

/// A toroidal Life grid.
///
/// Cells live in a flat buffer, row after row, so `(x, y)` is stored at `y * width + x`. Here `x`
/// is always the column and `y` the row.
///
/// Every coordinate is valid: lookups wrap around both axes, which makes the last column adjacent
/// to the first and the last row adjacent to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,

    /// Current generation, `width * height` cells long at all times
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of dead cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { width, height })?;

        debug!(width, height, "Created grid");

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Create a grid where only the given `(x, y)` cells are alive. Coordinates wrap.
    pub fn with_alive<I>(width: usize, height: usize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let mut grid = Self::new(width, height)?;

        for (x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: isize, y: isize) -> usize {
        wrap(y, self.height) * self.width + wrap(x, self.width)
    }

    /// The cell at `(x, y)`, wrapping both coordinates.
    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Overwrite the cell at `(x, y)`, wrapping both coordinates.
    pub fn set(&mut self, x: isize, y: isize, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    /// Count the alive cells among the 8 surrounding `(x, y)`.
    ///
    /// Each offset is wrapped on its own, so on grids narrower than 3 cells the same cell may be
    /// counted more than once. The result is always in `0..=8`.
    pub fn live_neighbors(&self, x: isize, y: isize) -> u8 {
        // Wrap before offsetting, so that `isize::MIN` and `isize::MAX` cannot overflow
        let x = wrap(x, self.width) as isize;
        let y = wrap(y, self.height) as isize;

        NEIGHBORHOOD
            .iter()
            .filter(|&&(dx, dy)| self.get(x + dx, y + dy).is_alive())
            .count() as u8
    }

    /// Advance to the next generation and return it.
    ///
    /// The whole next generation is computed from the current one before it replaces it, so no
    /// cell ever sees a neighbor that was already updated.
    pub fn step(&mut self) -> Snapshot<'_> {
        let mut next = Vec::with_capacity(self.cells.len());

        for y in 0..self.height as isize {
            for x in 0..self.width as isize {
                let n = self.live_neighbors(x, y);
                next.push(self.get(x, y).next(n));
            }
        }

        self.cells = next;

        trace!(population = self.population(), "Stepped grid");

        self.snapshot()
    }

    /// Set every cell from a source of uniform draws in `[0, 1)`. A cell comes out alive when its
    /// draw is above `0.5`.
    ///
    /// Cells are drawn in row-major order, one draw each.
    pub fn randomize<F>(&mut self, mut draw: F)
    where
        F: FnMut() -> f64,
    {
        for cell in self.cells.iter_mut() {
            *cell = Cell::from(draw() > 0.5);
        }

        debug!(population = self.population(), "Randomized grid");
    }

    /// Read only view of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.width,
            height: self.height,
            cells: &self.cells,
        }
    }

    /// `(x, y)` of every alive cell, in row-major order.
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

/// One generation of a [`Grid`], `height` rows of `width` cells each.
///
/// Unlike [`Grid::get`], lookups here do not wrap: this is what renderers consume, and they only
/// ever walk the grid in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    width: usize,
    height: usize,
    cells: &'a [Cell],
}

impl<'a> Snapshot<'a> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell in column `x` of row `y`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + use<'a> {
        self.cells.chunks_exact(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Copy out the generation as rows of alive flags.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.is_alive()).collect())
            .collect()
    }
}

/// One line per row, `#` for alive cells and `.` for dead ones.
impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let c = if cell.is_alive() { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
