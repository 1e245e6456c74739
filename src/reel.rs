use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;
use std::str::FromStr;

use crate::chars::check_char;
use crate::error::{Error, Result};
use crate::film::Film;
use crate::save::NEW_FRAME;
use crate::screen::Screen;

/// A film that plays a list of frames kept in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reel {
    width: usize,
    height: usize,
    frames: Vec<Screen>,
    cursor: usize,
}

impl Reel {
    /// Creates an empty reel with the given frame dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
            cursor: 0,
        }
    }

    /// Builds a reel from one multi-line text per frame. The reel is as big
    /// as the largest frame.
    pub fn from_texts(texts: &[&str]) -> Self {
        let frames: Vec<Screen> = texts.iter().map(|t| Screen::from_text(t)).collect();
        let width = frames.iter().map(Screen::width).max().unwrap_or(0);
        let height = frames.iter().map(Screen::height).max().unwrap_or(0);
        let mut reel = Self::new(width, height);
        for frame in frames {
            reel.push(frame);
        }
        reel
    }

    /// Appends a frame. It is cropped or padded with spaces to the reel's
    /// dimensions.
    pub fn push(&mut self, frame: Screen) {
        if frame.width() == self.width && frame.height() == self.height {
            self.frames.push(frame);
        } else {
            let mut fitted = Screen::new(self.width, self.height);
            fitted.blit(&frame, 0, 0);
            self.frames.push(fitted);
        }
    }

    /// Returns the number of frames.
    pub fn frames(&self) -> usize {
        self.frames.len()
    }

    /// Returns the frame at the given index, if it exists.
    pub fn frame(&self, frame: usize) -> Option<&Screen> {
        self.frames.get(frame)
    }

    /// Records every remaining frame of `film` into a new reel.
    pub fn record<F: Film + ?Sized>(film: &mut F) -> Self {
        let mut reel = Self::new(film.width(), film.height());
        reel.frames = crate::film::collect_frames(film);
        reel
    }

    /// Reads a reel from a file written by [`crate::save::save_film`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Reads a reel from any reader.
    pub fn from_reader<R: Read>(r: R) -> Result<Self> {
        let mut lines = BufReader::new(r).lines();
        Self::from_lines(&mut lines)
    }

    /// Reads a reel from an iterator of lines: a `<width> <height>` header,
    /// then every frame as `height` rows closed by a separator line.
    pub fn from_lines<R: Read>(lines: &mut io::Lines<BufReader<R>>) -> Result<Self> {
        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(Error::HeaderParsing(String::new())),
        };
        let (width, height) = parse_header(&header)?;
        let mut reel = Self::new(width, height);
        let mut rows: Vec<String> = Vec::new();
        for line in lines {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(line.as_str());
            if line == NEW_FRAME {
                let frame = reel.read_frame(&rows)?;
                reel.frames.push(frame);
                rows.clear();
            } else {
                rows.push(line.into());
            }
        }
        // Trailing lines without a separator are not a frame.
        if rows.iter().any(|r| !r.is_empty()) {
            return Err(Error::HeightMismatch(reel.frames(), rows.len()));
        }
        Ok(reel)
    }

    fn read_frame(&self, rows: &[String]) -> Result<Screen> {
        let index = self.frames();
        // Rows are followed by the blank line that closes the rendering.
        if rows.len() < self.height || rows[self.height..].iter().any(|r| !r.is_empty()) {
            return Err(Error::HeightMismatch(index, rows.len()));
        }
        let mut screen = Screen::new(self.width, self.height);
        for (r, row) in rows.iter().take(self.height).enumerate() {
            let cells = row.chars().count();
            if cells != self.width {
                return Err(Error::WidthMismatch(index, cells));
            }
            for (c, ch) in row.chars().enumerate() {
                let ch = check_char(ch).ok_or(Error::DisallowedChar(ch.into()))?;
                screen.set(r, c, ch);
            }
        }
        Ok(screen)
    }
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let parsed = match (parts.next(), parts.next(), parts.next()) {
        (Some(w), Some(h), None) => w.parse::<usize>().ok().zip(h.parse::<usize>().ok()),
        _ => None,
    };
    parsed.ok_or_else(|| Error::HeaderParsing(line.into()))
}

impl Film for Reel {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn advance(&mut self, screen: &mut Screen) -> bool {
        match self.frames.get(self.cursor) {
            Some(frame) => {
                screen.blit(frame, 0, 0);
                self.cursor += 1;
                true
            }
            None => false,
        }
    }

    fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl FromStr for Reel {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(Cursor::new(s.as_bytes()))
    }
}

impl TryFrom<&[u8]> for Reel {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::collect_frames;
    use pretty_assertions::assert_eq;

    #[test]
    fn plays_frames_in_order() {
        let mut reel = Reel::from_texts(&["ab\ncd", "ef\ngh"]);
        let mut screen = Screen::for_film(&reel);
        assert!(reel.advance(&mut screen));
        assert_eq!(screen.to_string(), "ab\ncd\n");
        assert!(reel.advance(&mut screen));
        assert_eq!(screen.to_string(), "ef\ngh\n");
        assert!(!reel.advance(&mut screen));
        assert!(!reel.advance(&mut screen));
        reel.rewind();
        assert!(reel.advance(&mut screen));
        assert_eq!(screen.to_string(), "ab\ncd\n");
    }

    #[test]
    fn push_fits_frame() {
        let mut reel = Reel::new(3, 2);
        reel.push(Screen::from_text("abcd\nefgh\nijkl"));
        reel.push(Screen::from_text("x"));
        assert_eq!(reel.frame(0).unwrap().to_string(), "abc\nefg\n");
        assert_eq!(reel.frame(1).unwrap().to_string(), "x  \n   \n");
    }

    #[test]
    fn record_keeps_remaining_frames() {
        let mut source = Reel::from_texts(&["1", "2", "3"]);
        let mut screen = Screen::for_film(&source);
        source.advance(&mut screen);
        let reel = Reel::record(&mut source);
        assert_eq!(reel.frames(), 2);
        assert_eq!(reel.frame(0).unwrap().to_string(), "2\n");
    }

    #[test]
    fn parse_stored_film() {
        let reel: Reel = "2 2\nab\ncd\n\n\\newframe\nef\ngh\n\n\\newframe\n"
            .parse()
            .unwrap();
        assert_eq!((reel.width(), reel.height(), reel.frames()), (2, 2, 2));
        assert_eq!(reel.frame(1).unwrap().to_string(), "ef\ngh\n");
    }

    #[test]
    fn parse_crlf() {
        let reel: Reel = "1 1\r\nx\r\n\r\n\\newframe\r\n".parse().unwrap();
        assert_eq!(collect_frames(&mut reel.clone())[0].to_string(), "x\n");
    }

    #[test]
    fn parse_empty_film() {
        let reel: Reel = "4 3\n".parse().unwrap();
        assert_eq!(reel.frames(), 0);
        assert_eq!((reel.width(), reel.height()), (4, 3));
    }

    #[test]
    fn parse_bad_header() {
        for header in &["", "2", "a b", "2 2 2"] {
            match header.parse::<Reel>() {
                Err(Error::HeaderParsing(_)) => {}
                other => panic!("unexpected result for {:?}: {:?}", header, other),
            }
        }
    }

    #[test]
    fn parse_width_mismatch() {
        match "2 1\nabc\n\n\\newframe\n".parse::<Reel>() {
            Err(Error::WidthMismatch(0, 3)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn parse_height_mismatch() {
        match "1 2\na\n\\newframe\n".parse::<Reel>() {
            Err(Error::HeightMismatch(0, 1)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match "1 1\na\n\n\\newframe\nb\n".parse::<Reel>() {
            Err(Error::HeightMismatch(1, 1)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn parse_disallowed_char() {
        match "1 1\n\u{7}\n\n\\newframe\n".parse::<Reel>() {
            Err(Error::DisallowedChar(7)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
