/// Births happen on exactly this many live neighbors.
const BIRTH: u8 = 3;

/// Alive cells survive on any of these neighbor counts.
const SURVIVAL: [u8; 2] = [2, 3];

/// State of a single grid cell.
///
/// A `Cell` carries no identity beyond its position in a [`Grid`](crate::grid::Grid). Each
/// generation is built out of fresh values, so nothing here is ever mutated in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The state this cell takes in the next generation, given how many of its 8 neighbors are
    /// currently alive.
    ///
    /// This is the standard Life rule, `B3/S23`:
    /// ```notrust
    /// alive, 2 or 3 neighbors  -> alive
    /// alive, anything else     -> dead
    /// dead,  exactly 3         -> alive
    /// dead,  anything else     -> dead
    /// ```
    ///
    /// See: https://conwaylife.com/wiki/Rulestring
    pub const fn next(self, live_neighbors: u8) -> Cell {
        let alive = match self {
            Cell::Alive => live_neighbors == SURVIVAL[0] || live_neighbors == SURVIVAL[1],
            Cell::Dead => live_neighbors == BIRTH,
        };

        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
