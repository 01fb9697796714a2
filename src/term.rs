use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;
use tracing::debug;
use tracing::warn;

use crate::canvas::Canvas;
use crate::grid::Snapshot;
use crate::sim::Render;
use crate::tiling::Tiling;

/// Colors used when writing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Alive cells
    pub live: Color,

    /// Dead cells and the borders between them
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            live: Color::Rgb {
                r: 0xe5,
                g: 0xee,
                b: 0xf7,
            },
            background: Color::Reset,
        }
    }
}

/// A terminal that displays generations, tiled to fill the whole screen.
pub struct Terminal<W: Write> {
    out: W,
    canvas: Canvas,
    tiling: Tiling,
    palette: Palette,

    /// Set after a resize, so that leftovers of the old frame get wiped
    clear: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, cols: u16, rows: u16, tiling: Tiling, palette: Palette) -> Self {
        Self {
            out,
            canvas: Canvas::for_terminal(cols, rows),
            tiling,
            palette,
            clear: true,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Take over the terminal: raw mode, alternate screen, no cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle("torus-life"),
            cursor::Hide
        )
    }

    /// Undo [`Terminal::enter`].
    pub fn leave(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        debug!(cols, rows, "Resizing canvas");

        self.canvas = Canvas::for_terminal(cols, rows);
        self.clear = true;

        if self.canvas.is_empty() {
            warn!(cols, rows, "Terminal has no room to draw");
        }
    }

    fn draw(&mut self, snapshot: Snapshot<'_>) -> io::Result<()> {
        self.tiling.paint(&mut self.canvas, snapshot);
        let frame = self.canvas.render();

        queue!(
            self.out,
            terminal::BeginSynchronizedUpdate,
            style::SetForegroundColor(self.palette.live),
            style::SetBackgroundColor(self.palette.background)
        )?;

        if self.clear {
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
            self.clear = false;
        }

        for (row, line) in frame.lines().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), style::Print(line))?;
        }

        queue!(
            self.out,
            style::ResetColor,
            terminal::EndSynchronizedUpdate
        )?;

        self.out.flush()
    }
}

impl<W: Write> Render for Terminal<W> {
    type Error = io::Error;

    fn render(&mut self, snapshot: Snapshot<'_>) -> Result<(), Self::Error> {
        self.draw(snapshot)
    }
}

#[cfg(test)]
mod test {
    use super::Palette;
    use super::Terminal;
    use crate::grid::Grid;
    use crate::sim::Render;
    use crate::tiling::Tiling;

    fn output(term: &Terminal<Vec<u8>>) -> String {
        String::from_utf8_lossy(term.get_ref()).into_owned()
    }

    #[test]
    fn render_writes_every_line() {
        let grid = Grid::with_alive(2, 1, [(0, 0)]).unwrap();
        let mut term = Terminal::new(Vec::new(), 4, 2, Tiling::new(1, 1), Palette::default());

        term.render(grid.snapshot()).unwrap();

        let out = output(&term);
        assert_eq!(out.matches("⢐⠀⢐⠀").count(), 2);
        assert!(out.contains("\x1b[2J"), "first frame clears the screen");
    }

    #[test]
    fn only_clears_after_resize() {
        let grid = Grid::new(2, 2).unwrap();
        let mut term = Terminal::new(Vec::new(), 4, 1, Tiling::default(), Palette::default());

        term.render(grid.snapshot()).unwrap();
        term.render(grid.snapshot()).unwrap();
        assert_eq!(output(&term).matches("\x1b[2J").count(), 1);

        term.resize(8, 2);
        assert_eq!(term.canvas().width(), 16);
        assert_eq!(term.canvas().height(), 8);

        term.render(grid.snapshot()).unwrap();
        assert_eq!(output(&term).matches("\x1b[2J").count(), 2);
    }

    #[test]
    fn zero_sized_terminal() {
        let grid = Grid::with_alive(2, 2, [(0, 0)]).unwrap();
        let mut term = Terminal::new(Vec::new(), 0, 0, Tiling::default(), Palette::default());

        term.render(grid.snapshot()).unwrap();

        assert!(term.canvas().is_empty());
        assert!(!output(&term).contains('\u{2800}'));
    }
}
