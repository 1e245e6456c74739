use crate::chars::BORDER;
use crate::film::Film;
use crate::screen::Screen;

/// Frames every image of a film with a one cell wide border.
#[derive(Debug, Clone)]
pub struct Border<F> {
    film: F,
    glyph: char,
}

impl<F: Film> Border<F> {
    /// Borders `film` with [`BORDER`].
    pub fn new(film: F) -> Self {
        Self::with_glyph(film, BORDER)
    }

    /// Borders `film` with `glyph`.
    pub fn with_glyph(film: F, glyph: char) -> Self {
        Self { film, glyph }
    }

    /// Returns the character the border is drawn with.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Gives back the wrapped film.
    pub fn into_inner(self) -> F {
        self.film
    }
}

impl<F: Film> Film for Border<F> {
    fn height(&self) -> usize {
        self.film.height() + 2
    }

    fn width(&self) -> usize {
        self.film.width() + 2
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        let mut inner = Screen::for_film(&self.film);
        let res = self.film.advance(&mut inner);

        let (height, width) = (self.height(), self.width());
        screen.outline(height, width, self.glyph);
        // Copied even when the film is over: the interior is then blank.
        screen.blit_within(&inner, 1, 1, height - 1, width - 1);
        res
    }

    fn rewind(&mut self) {
        self.film.rewind();
    }
}
