use core::fmt;

use crate::chars::{check_char, SPACE};
use crate::film::Film;

/// A fixed-size grid of single characters that films draw into.
///
/// Screens are owned by whoever drives a film and lent to it for the
/// duration of one `advance` call. All writes are bounds checked: a write
/// outside the grid is silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Screen {
    pub(crate) width: usize,
    pub(crate) rows: Vec<Vec<char>>,
}

impl Screen {
    /// Creates a blank screen of given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, SPACE)
    }

    /// Creates a screen of given dimensions filled with `fill`.
    /// A disallowed `fill` gives a blank screen.
    pub fn filled(width: usize, height: usize, fill: char) -> Self {
        Self {
            width,
            rows: vec![vec![check_char(fill).unwrap_or(SPACE); width]; height],
        }
    }

    /// Creates a blank screen big enough to show the frames of `film`.
    pub fn for_film<F: Film + ?Sized>(film: &F) -> Self {
        Self::new(film.width(), film.height())
    }

    /// Builds a screen from multi-line text. Width is the longest line,
    /// shorter lines are padded with spaces.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines
            .iter()
            .map(|line| line.chars().filter_map(check_char).count())
            .max()
            .unwrap_or(0);
        let mut screen = Self::new(width, lines.len());
        for (row, line) in lines.iter().enumerate() {
            screen.print(row, 0, line);
        }
        screen
    }

    /// Returns the width of the screen in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the screen in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Gets the cell at (row, col), if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets the cell at (row, col). Out of bounds writes are ignored,
    /// disallowed characters are stored as space.
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = check_char(ch).unwrap_or(SPACE);
        }
    }

    /// Returns one row as a string.
    pub fn row(&self, row: usize) -> Option<String> {
        self.rows.get(row).map(|r| r.iter().collect())
    }

    /// Fills the entire screen with the given character.
    /// A disallowed `fill` blanks the screen.
    pub fn fill(&mut self, fill: char) {
        let fill = check_char(fill).unwrap_or(SPACE);
        for row in &mut self.rows {
            for cell in row {
                *cell = fill
            }
        }
    }

    /// Clears the screen: sets every cell to space.
    pub fn clear(&mut self) {
        self.fill(SPACE);
    }

    /// Prints text starting at (row, col), skipping disallowed characters.
    pub fn print(&mut self, row: usize, col: usize, line: &str) {
        let mut col = col;
        for ch in line.chars().filter_map(check_char) {
            self.set(row, col, ch);
            col += 1;
        }
    }

    /// Draws the outline of the `height` x `width` rectangle anchored at the
    /// top-left corner with `glyph`.
    pub fn outline(&mut self, height: usize, width: usize, glyph: char) {
        if height == 0 || width == 0 {
            return;
        }
        for col in 0..width {
            self.set(0, col, glyph);
            self.set(height - 1, col, glyph);
        }
        for row in 1..height.saturating_sub(1) {
            self.set(row, 0, glyph);
            self.set(row, width - 1, glyph);
        }
    }

    /// Copies `src` so that its top-left cell lands on (row, col).
    /// Cells falling outside this screen are dropped.
    pub fn blit(&mut self, src: &Screen, row: usize, col: usize) {
        let (height, width) = (self.height(), self.width());
        self.blit_within(src, row, col, height, width);
    }

    /// Like `blit`, but also drops cells outside the `height` x `width`
    /// region anchored at the top-left corner.
    pub fn blit_within(
        &mut self,
        src: &Screen,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) {
        for (i, src_row) in src.rows.iter().enumerate() {
            let r = i + row;
            if r >= height {
                break;
            }
            for (j, &ch) in src_row.iter().enumerate() {
                let c = j + col;
                if c >= width {
                    break;
                }
                self.set(r, c, ch);
            }
        }
    }
}

/// Displays the screen as text, each row followed by a newline.
impl fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
