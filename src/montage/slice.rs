use tracing::trace;

use crate::film::Film;
use crate::screen::Screen;

/// Exposes frames `start..=end` of a film.
///
/// An inverted range (`end < start`) is an empty film; the wrapped film is
/// then never played.
#[derive(Debug, Clone)]
pub struct Slice<F> {
    film: F,
    start: usize,
    end: usize,
    cpt: usize,
}

impl<F: Film> Slice<F> {
    /// Keeps frames `start..=end` of `film`.
    pub fn new(film: F, start: usize, end: usize) -> Self {
        Self {
            film,
            start,
            end,
            cpt: 0,
        }
    }

    /// Gives back the wrapped film.
    pub fn into_inner(self) -> F {
        self.film
    }
}

impl<F: Film> Film for Slice<F> {
    fn height(&self) -> usize {
        self.film.height()
    }

    fn width(&self) -> usize {
        self.film.width()
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        if self.end < self.start {
            return false;
        }
        if self.cpt < self.start {
            trace!(frames = self.start - self.cpt, "skipping frames before slice");
            let mut skipped = Screen::for_film(&self.film);
            while self.cpt < self.start {
                self.film.advance(&mut skipped);
                self.cpt += 1;
            }
        }
        if self.cpt <= self.end {
            self.cpt += 1;
            return self.film.advance(screen);
        }
        false
    }

    fn rewind(&mut self) {
        self.film.rewind();
        self.cpt = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::collect_frames;
    use crate::montage::tests::Probe;
    use crate::reel::Reel;
    use pretty_assertions::assert_eq;

    fn digits() -> Reel {
        Reel::from_texts(&["0", "1", "2", "3", "4"])
    }

    fn texts(frames: &[Screen]) -> Vec<String> {
        frames.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn middle_range() {
        let mut film = Slice::new(digits(), 1, 3);
        assert_eq!(texts(&collect_frames(&mut film)), vec!["1\n", "2\n", "3\n"]);
    }

    #[test]
    fn single_frame() {
        let mut film = Slice::new(digits(), 4, 4);
        assert_eq!(texts(&collect_frames(&mut film)), vec!["4\n"]);
    }

    #[test]
    fn range_past_the_end() {
        let mut film = Slice::new(digits(), 3, 10);
        assert_eq!(texts(&collect_frames(&mut film)), vec!["3\n", "4\n"]);
        let mut film = Slice::new(digits(), 7, 10);
        assert!(collect_frames(&mut film).is_empty());
    }

    #[test]
    fn inverted_range_never_plays() {
        let mut film = Slice::new(Probe::new(digits()), 1, 0);
        let mut screen = Screen::for_film(&film);
        assert!(!film.advance(&mut screen));
        assert!(!film.advance(&mut screen));
        assert_eq!(film.into_inner().advances, 0);
    }

    #[test]
    fn stops_consuming_after_end() {
        let mut film = Slice::new(Probe::new(digits()), 0, 1);
        collect_frames(&mut film);
        let mut screen = Screen::for_film(&film);
        assert!(!film.advance(&mut screen));
        assert_eq!(film.into_inner().advances, 2);
    }

    #[test]
    fn skipped_frames_do_not_reach_screen() {
        let mut film = Slice::new(Reel::from_texts(&["a", "b"]), 1, 1);
        let mut screen = Screen::filled(1, 1, '.');
        assert!(film.advance(&mut screen));
        assert_eq!(screen.to_string(), "b\n");

        let mut film = Slice::new(Reel::from_texts(&["a"]), 1, 1);
        let mut screen = Screen::filled(1, 1, '.');
        assert!(!film.advance(&mut screen));
        assert_eq!(screen.to_string(), ".\n");
    }

    #[test]
    fn rewind_replays() {
        let mut film = Slice::new(digits(), 2, 3);
        let first = collect_frames(&mut film);
        film.rewind();
        assert_eq!(collect_frames(&mut film), first);
    }
}
