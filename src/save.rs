use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::film::Film;
use crate::screen::Screen;

/// Line closing every frame of a stored film.
pub const NEW_FRAME: &str = "\\newframe";

/// Writes every remaining frame of `film` to `out` and returns the number of
/// frames written.
///
/// The output starts with a `<width> <height>` line. Each frame follows as
/// its rows, a blank line and a [`NEW_FRAME`] line. The screen is cleared
/// between frames.
pub fn write_film<F, W>(film: &mut F, out: &mut W) -> Result<usize>
where
    F: Film + ?Sized,
    W: Write,
{
    let mut screen = Screen::for_film(&*film);
    writeln!(out, "{} {}", film.width(), film.height())?;
    let mut frames = 0;
    while film.advance(&mut screen) {
        writeln!(out, "{}", screen)?;
        writeln!(out, "{}", NEW_FRAME)?;
        screen.clear();
        frames += 1;
    }
    out.flush()?;
    Ok(frames)
}

/// Saves every remaining frame of `film` into a new file at `path`.
///
/// Fails with [`crate::Error::Io`] if the file cannot be created.
pub fn save_film<F, P>(film: &mut F, path: P) -> Result<usize>
where
    F: Film + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    let frames = write_film(film, &mut out)?;
    debug!(
        path = %path.display(),
        width = film.width(),
        height = film.height(),
        frames,
        "film saved"
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::reel::Reel;
    use crate::samples::Diagonal;
    use pretty_assertions::assert_eq;
    use std::convert::TryFrom;

    #[test]
    fn write_format() {
        let mut film = Reel::from_texts(&["ab\ncd", "ef\ngh"]);
        let mut out = Vec::new();
        assert_eq!(write_film(&mut film, &mut out).unwrap(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 2\nab\ncd\n\n\\newframe\nef\ngh\n\n\\newframe\n"
        );
    }

    #[test]
    fn write_empty_film() {
        let mut film = Reel::new(3, 1);
        let mut out = Vec::new();
        assert_eq!(write_film(&mut film, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "3 1\n");
    }

    #[test]
    fn screen_cleared_between_frames() {
        let mut film = Diagonal::with_size(2, 2);
        let mut out = Vec::new();
        write_film(&mut film, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 2\na \n  \n\n\\newframe\n  \n a\n\n\\newframe\n"
        );
    }

    struct Scribble;

    impl Film for Scribble {
        fn height(&self) -> usize {
            1
        }

        fn width(&self) -> usize {
            3
        }

        fn advance(&mut self, screen: &mut Screen) -> bool {
            screen.set(0, 0, '\0');
            screen.set(0, 1, '\n');
            screen.set(0, 2, 'x');
            true
        }

        fn rewind(&mut self) {}
    }

    #[test]
    fn control_chars_written_as_space() {
        let mut film = Scribble.slice(0, 0);
        let mut out = Vec::new();
        assert_eq!(write_film(&mut film, &mut out).unwrap(), 1);
        let mut loaded = Reel::try_from(&out[..]).unwrap();
        let frames = crate::film::collect_frames(&mut loaded);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].to_string(), "  x\n");
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("film.txt");
        let mut film = Diagonal::new().bordered();
        assert_eq!(save_film(&mut film, &path).unwrap(), 20);

        film.rewind();
        let mut loaded = Reel::from_file(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (12, 12));
        let expected = crate::film::collect_frames(&mut film);
        let got = crate::film::collect_frames(&mut loaded);
        assert_eq!(got, expected);
    }

    #[test]
    fn save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("film.txt");
        let mut film = Diagonal::new();
        match save_film(&mut film, &path) {
            Err(Error::Io(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
