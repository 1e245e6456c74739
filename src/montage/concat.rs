use tracing::trace;

use crate::film::Film;
use crate::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    First,
    Second,
}

/// Plays one film, then another, as a single film.
///
/// The canvas is big enough for both; each part draws in its top-left
/// corner and leaves the rest of the screen untouched.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
    part: Part,
}

impl<A: Film, B: Film> Concat<A, B> {
    /// Plays `first`, then `second`.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            part: Part::First,
        }
    }

    /// Gives back both films.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Film, B: Film> Film for Concat<A, B> {
    fn height(&self) -> usize {
        self.first.height().max(self.second.height())
    }

    fn width(&self) -> usize {
        self.first.width().max(self.second.width())
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        if self.part == Part::First {
            if self.first.advance(screen) {
                return true;
            }
            trace!("first part over, switching to second");
            self.part = Part::Second;
            self.first.rewind();
        }
        self.second.advance(screen)
    }

    fn rewind(&mut self) {
        self.first.rewind();
        self.second.rewind();
        self.part = Part::First;
    }
}
