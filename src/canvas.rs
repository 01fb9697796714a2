/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A monochrome drawing surface, addressed in braille dots.
///
/// A terminal cell holds one braille character, which is a 2x4 block of dots. The canvas keeps one
/// flag per dot and only encodes them into text when asked to [`render`](Canvas::render).
pub struct Canvas {
    /// The dot buffer, row-major
    dots: Vec<bool>,

    /// One codepoint per 2x4 block of dots
    cp: Vec<u32>,

    /// The encoded frame
    frame: String,

    /// Width in dots
    w: usize,

    /// Height in dots
    h: usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        // Each braille character takes 3 bytes in UTF-8, plus one newline per line.
        let frame = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            dots: vec![false; w * h],
            cp: vec![BRAILLE_EMPTY; bw * bh],
            frame,
            w,
            h,
        }
    }

    /// A canvas exactly covering `cols x rows` terminal cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize * 2, rows as usize * 4)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Whether the dot at `(x, y)` is set, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.w && y < self.h {
            Some(self.dots[self.xy_from(x, y)])
        } else {
            None
        }
    }

    /// Unset every dot.
    pub fn clear(&mut self) {
        self.dots.fill(false);
    }

    /// Set (or unset) a `w x h` rectangle of dots with its top left corner at `(x, y)`.
    ///
    /// Whatever falls outside the canvas is dropped.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, on: bool) {
        let x_end = x.saturating_add(w).min(self.w);
        let y_end = y.saturating_add(h).min(self.h);

        for y in y..y_end {
            for x in x..x_end {
                let i = self.xy_from(x, y);
                self.dots[i] = on;
            }
        }
    }

    /// Encode the canvas as text: one line of braille characters per 4 rows of dots, each line
    /// ending in `\n`.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        self.cp.fill(BRAILLE_EMPTY);

        for (n, &on) in self.dots.iter().enumerate() {
            if on {
                let (x, y) = self.xy_to(n);
                self.cp[(y / 4) * bw + (x / 2)] |= Self::get_hex_value(x, y);
            }
        }

        self.frame.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.frame.push('\n');
            }

            // All of U+2800..=U+28FF are valid chars
            self.frame.push(char::from_u32(c).unwrap_or(' '));
        }

        if !self.cp.is_empty() {
            self.frame.push('\n');
        }

        &self.frame
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
