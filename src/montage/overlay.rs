use crate::film::Film;
use crate::screen::Screen;

/// Draws the frames of one film over those of another.
///
/// The base film sets the canvas and the length of the result. The inlay is
/// placed with its top-left corner at (`row`, `col`) and clipped to the
/// canvas. Once the inlay is over it stays over until the overlay is
/// rewound.
#[derive(Debug, Clone)]
pub struct Overlay<A, B> {
    base: A,
    inlay: B,
    row: usize,
    col: usize,
}

impl<A: Film, B: Film> Overlay<A, B> {
    /// Negative offsets are clamped to zero.
    pub fn new(base: A, inlay: B, row: isize, col: isize) -> Self {
        Self {
            base,
            inlay,
            row: row.max(0) as usize,
            col: col.max(0) as usize,
        }
    }

    /// Position of the inlay's top-left corner as (row, col).
    pub fn offset(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Gives back both films.
    pub fn into_inner(self) -> (A, B) {
        (self.base, self.inlay)
    }
}

impl<A: Film, B: Film> Film for Overlay<A, B> {
    fn height(&self) -> usize {
        self.base.height()
    }

    fn width(&self) -> usize {
        self.base.width()
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        let res = self.base.advance(screen);
        let mut inlay = Screen::for_film(&self.inlay);
        if self.inlay.advance(&mut inlay) {
            let (height, width) = (self.height(), self.width());
            screen.blit_within(&inlay, self.row, self.col, height, width);
        }
        res
    }

    fn rewind(&mut self) {
        self.base.rewind();
        self.inlay.rewind();
    }
}
