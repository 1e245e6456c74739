use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::film::Film;
use crate::screen::Screen;

/// Default projection speed, in frames per second.
pub const DEFAULT_FPS: u32 = 12;

/// Plays films as text, one frame every `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Projector {
    pub interval: Duration,
}

impl Projector {
    /// Creates a projector pausing `interval` after each frame.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Creates a projector showing `fps` frames per second.
    /// Zero means no pause between frames.
    pub fn with_fps(fps: u32) -> Self {
        if fps == 0 {
            Self::new(Duration::ZERO)
        } else {
            Self::new(Duration::from_secs(1) / fps)
        }
    }

    /// Projects every remaining frame of `film` to stdout.
    pub fn project<F: Film + ?Sized>(&self, film: &mut F) -> Result<usize> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.project_to(film, &mut out)
    }

    /// Projects every remaining frame of `film` to `out` and returns the
    /// number of frames shown.
    ///
    /// Each frame is written as its rows followed by a blank line. The
    /// screen is cleared between frames, films only draw on a blank screen.
    pub fn project_to<F, W>(&self, film: &mut F, out: &mut W) -> Result<usize>
    where
        F: Film + ?Sized,
        W: Write,
    {
        debug!(
            width = film.width(),
            height = film.height(),
            interval_ms = self.interval.as_millis() as u64,
            "projection started"
        );
        let mut screen = Screen::for_film(&*film);
        let mut frames = 0;
        while film.advance(&mut screen) {
            writeln!(out, "{}", screen)?;
            out.flush()?;
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
            screen.clear();
            frames += 1;
        }
        debug!(frames, "projection finished");
        Ok(frames)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::with_fps(DEFAULT_FPS)
    }
}
