use crate::canvas::Canvas;
use crate::grid::Snapshot;

/// Paints a generation over and over until it covers a whole [`Canvas`].
///
/// Every cell is a `cell_size` square with `cell_gap` dots of border before it on both axes, so a
/// full tile of the world is `width * (cell_size + cell_gap)` dots wide:
/// ```notrust
///  gap  size  gap  size
/// |   |#####|   |     |
/// ```
/// Tiles start at the canvas origin and repeat to the right and downwards. The last tile on each
/// axis is cut off by the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiling {
    cell_size: usize,
    cell_gap: usize,
}

impl Default for Tiling {
    fn default() -> Self {
        Self::new(3, 1)
    }
}

impl Tiling {
    /// A zero `cell_size` is bumped to 1, so tiles always have an extent.
    pub fn new(cell_size: usize, cell_gap: usize) -> Self {
        Self {
            cell_size: cell_size.max(1),
            cell_gap,
        }
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn cell_gap(&self) -> usize {
        self.cell_gap
    }

    /// Distance in dots from one cell to the next.
    fn pitch(&self) -> usize {
        self.cell_size.saturating_add(self.cell_gap)
    }

    /// Width and height in dots of a single copy of the world.
    pub fn tile_extent(&self, snapshot: Snapshot<'_>) -> (usize, usize) {
        (
            snapshot.width().saturating_mul(self.pitch()),
            snapshot.height().saturating_mul(self.pitch()),
        )
    }

    /// How many tiles it takes to cover `canvas`, horizontally and vertically.
    pub fn tiles_for(&self, canvas: &Canvas, snapshot: Snapshot<'_>) -> (usize, usize) {
        let (tw, th) = self.tile_extent(snapshot);

        (canvas.width().div_ceil(tw), canvas.height().div_ceil(th))
    }

    /// Clear `canvas` and paint `snapshot` across all of it.
    ///
    /// Only alive cells set dots, so dead cells and borders share the background.
    pub fn paint(&self, canvas: &mut Canvas, snapshot: Snapshot<'_>) {
        canvas.clear();

        let (tw, th) = self.tile_extent(snapshot);
        let (nx, ny) = self.tiles_for(canvas, snapshot);

        for ty in 0..ny {
            for tx in 0..nx {
                self.paint_tile(canvas, snapshot, tx.saturating_mul(tw), ty.saturating_mul(th));
            }
        }
    }

    /// `dx` and `dy` are the tile origin in dots.
    fn paint_tile(&self, canvas: &mut Canvas, snapshot: Snapshot<'_>, dx: usize, dy: usize) {
        let pitch = self.pitch();

        for (y, row) in snapshot.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if !cell.is_alive() {
                    continue;
                }

                canvas.fill_rect(
                    dx.saturating_add(x.saturating_mul(pitch)).saturating_add(self.cell_gap),
                    dy.saturating_add(y.saturating_mul(pitch)).saturating_add(self.cell_gap),
                    self.cell_size,
                    self.cell_size,
                    true,
                );
            }
        }
    }
}
