//! Small films to play with.

use crate::film::Film;
use crate::screen::Screen;

/// An `a` walking along the diagonal of a square.
///
/// Only the cell of the current position is drawn, so on a screen that is
/// not cleared between frames the whole path stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagonal {
    side: usize,
    frames: usize,
    num: usize,
}

impl Diagonal {
    /// A 10x10 square, 20 frames: the walk is done twice.
    pub fn new() -> Self {
        Self::with_size(10, 20)
    }

    /// A `side` x `side` square, `frames` frames long.
    pub fn with_size(side: usize, frames: usize) -> Self {
        Self {
            side,
            frames,
            num: 0,
        }
    }
}

impl Default for Diagonal {
    fn default() -> Self {
        Self::new()
    }
}

impl Film for Diagonal {
    fn height(&self) -> usize {
        self.side
    }

    fn width(&self) -> usize {
        self.side
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        if self.num >= self.frames || self.side == 0 {
            return false;
        }
        let pos = self.num % self.side;
        screen.set(pos, pos, 'a');
        self.num += 1;
        true
    }

    fn rewind(&mut self) {
        self.num = 0;
    }
}
