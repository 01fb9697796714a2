use std::convert::Infallible;

use rand::Rng;
use tracing::debug;

use crate::grid::Grid;
use crate::grid::GridError;
use crate::grid::Snapshot;

/// Something that can display a generation.
///
/// Implementors own every pixel, geometry and tiling concern. The simulation only promises to hand
/// over a full `height x width` generation once per step.
pub trait Render {
    type Error;

    fn render(&mut self, snapshot: Snapshot<'_>) -> Result<(), Self::Error>;
}

/// Discards every generation.
impl Render for () {
    type Error = Infallible;

    fn render(&mut self, _snapshot: Snapshot<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Drives a single [`Grid`].
///
/// There is no state here beyond the grid itself. Cadence is up to whoever calls [`Simulation::step`].
pub struct Simulation {
    grid: Grid,
}

impl Simulation {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current generation, without advancing.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.grid.snapshot()
    }

    /// Advance one generation, then hand it to `sink`.
    ///
    /// The sink is called exactly once, after the grid has fully transitioned.
    pub fn step<R>(&mut self, sink: &mut R) -> Result<(), R::Error>
    where
        R: Render,
    {
        let snapshot = self.grid.step();

        sink.render(snapshot)
    }

    /// Randomize every cell from `draw`, which must yield uniform values in `[0, 1)`.
    pub fn seed<F>(&mut self, draw: F)
    where
        F: FnMut() -> f64,
    {
        self.grid.randomize(draw);
    }

    pub fn seed_from_rng<R>(&mut self, rng: &mut R)
    where
        R: Rng,
    {
        debug!("Seeding from rng");

        self.seed(|| rng.gen_range(0.0..1.0));
    }
}
