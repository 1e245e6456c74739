use crate::montage::{Border, Concat, Overlay, Repeat, Slice};
use crate::screen::Screen;

/// A finite, restartable sequence of fixed-size frames, produced one at a
/// time into a caller supplied screen.
///
/// Every film must return `false` from [`Film::advance`] after a finite
/// number of calls, and keep returning `false` until [`Film::rewind`].
/// Combinators rely on this to terminate.
pub trait Film {
    /// Height of the frames in rows. Constant for the lifetime of the film.
    fn height(&self) -> usize;

    /// Width of the frames in columns. Constant for the lifetime of the film.
    fn width(&self) -> usize;

    /// Draws the next frame into the top-left `height` x `width` corner of
    /// `screen`.
    ///
    /// Returns `true` if a frame was drawn and `false` once the film is
    /// over. The screen is not cleared beforehand; the film is responsible
    /// for every cell it wants to show.
    fn advance(&mut self, screen: &mut Screen) -> bool;

    /// Goes back to the first frame. Replays are identical to the first run.
    fn rewind(&mut self);

    /// Surrounds every frame with a one cell border of `*`.
    fn bordered(self) -> Border<Self>
    where
        Self: Sized,
    {
        Border::new(self)
    }

    /// Plays `next` after this film ends.
    fn then<B: Film>(self, next: B) -> Concat<Self, B>
    where
        Self: Sized,
    {
        Concat::new(self, next)
    }

    /// Keeps only frames `start..=end`.
    fn slice(self, start: usize, end: usize) -> Slice<Self>
    where
        Self: Sized,
    {
        Slice::new(self, start, end)
    }

    /// Draws the frames of `inlay` over this film, top-left corner at
    /// (row, col). Negative offsets are clamped to zero.
    fn overlay<B: Film>(self, inlay: B, row: isize, col: isize) -> Overlay<Self, B>
    where
        Self: Sized,
    {
        Overlay::new(self, inlay, row, col)
    }

    /// Plays this film `times` times in a row.
    fn repeat(self, times: usize) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat::new(self, times)
    }
}

impl<F: Film + ?Sized> Film for Box<F> {
    fn height(&self) -> usize {
        (**self).height()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        (**self).advance(screen)
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

impl<F: Film + ?Sized> Film for &mut F {
    fn height(&self) -> usize {
        (**self).height()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        (**self).advance(screen)
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

/// Plays `film` to the end from its current position, collecting each
/// frame drawn on a fresh blank screen.
pub fn collect_frames<F: Film + ?Sized>(film: &mut F) -> Vec<Screen> {
    let mut frames = Vec::new();
    loop {
        let mut screen = Screen::for_film(&*film);
        if !film.advance(&mut screen) {
            break;
        }
        frames.push(screen);
    }
    frames
}
