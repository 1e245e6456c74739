use tracing::trace;

use crate::film::Film;
use crate::screen::Screen;

/// Plays a film a fixed number of times, without gap between runs.
///
/// Zero repetitions is an empty film.
#[derive(Debug, Clone)]
pub struct Repeat<F> {
    film: F,
    times: usize,
    cpt: usize,
}

impl<F: Film> Repeat<F> {
    /// Plays `film` `times` times.
    pub fn new(film: F, times: usize) -> Self {
        Self {
            film,
            times,
            cpt: 0,
        }
    }

    /// Gives back the wrapped film.
    pub fn into_inner(self) -> F {
        self.film
    }
}

impl<F: Film> Film for Repeat<F> {
    fn height(&self) -> usize {
        self.film.height()
    }

    fn width(&self) -> usize {
        self.film.width()
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        if self.cpt >= self.times {
            return false;
        }
        let mut res = self.film.advance(screen);
        if !res {
            self.cpt += 1;
            trace!(run = self.cpt, times = self.times, "run over");
            self.film.rewind();
            if self.cpt < self.times {
                res = self.film.advance(screen);
            }
        }
        res
    }

    fn rewind(&mut self) {
        self.film.rewind();
        self.cpt = 0;
    }
}
