use core::fmt::Display;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when saving or loading films.
///
/// Films themselves never fail; only the I/O boundary does.
#[derive(Debug, Clone)]
pub enum Error {
    /// Failed to parse the `<width> <height>` header line.
    HeaderParsing(String),

    /// Row of a stored frame has the wrong number of cells (frame, cells).
    WidthMismatch(usize, usize),
    /// Stored frame has the wrong number of rows (frame, rows).
    HeightMismatch(usize, usize),

    /// Character with disallowed code point.
    DisallowedChar(u32),

    /// I/O error occurred.
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::HeaderParsing(line) => {
                write!(f, "failed to parse film header '{}'; expected '<width> <height>'", line)
            }
            Error::WidthMismatch(frame, cells) => {
                write!(f, "frame {} has a row of {} cells, width does not match", frame, cells)
            }
            Error::HeightMismatch(frame, rows) => {
                write!(f, "frame {} has {} rows, height does not match", frame, rows)
            }
            Error::DisallowedChar(ch) => write!(f, "disallowed char with code: {}", ch),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
