//! Combinators building films out of other films.
//!
//! Each combinator owns the film(s) it wraps and is a [`Film`] itself, so
//! they nest freely. Nothing is buffered beyond the scratch screens needed
//! for a single frame.

mod border;
mod concat;
mod overlay;
mod repeat;
mod slice;

pub use border::Border;
pub use concat::Concat;
pub use overlay::Overlay;
pub use repeat::Repeat;
pub use slice::Slice;

use crate::film::Film;

/// Surrounds every frame of `film` with a border of `*`.
pub fn border<F: Film>(film: F) -> Border<F> {
    Border::new(film)
}

/// Plays `first`, then `second`.
pub fn concat<A: Film, B: Film>(first: A, second: B) -> Concat<A, B> {
    Concat::new(first, second)
}

/// Keeps frames `start..=end` of `film`. Empty if `end < start`.
pub fn slice<F: Film>(film: F, start: usize, end: usize) -> Slice<F> {
    Slice::new(film, start, end)
}

/// Draws `inlay` over `base` with its top-left corner at (`row`, `col`).
pub fn overlay<A: Film, B: Film>(base: A, inlay: B, row: isize, col: isize) -> Overlay<A, B> {
    Overlay::new(base, inlay, row, col)
}

/// Plays `film` `times` times. Empty if `times` is zero.
pub fn repeat<F: Film>(film: F, times: usize) -> Repeat<F> {
    Repeat::new(film, times)
}
