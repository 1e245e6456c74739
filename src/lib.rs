pub mod chars;
pub mod error;
pub mod film;
pub mod montage;
pub mod projector;
pub mod reel;
pub mod samples;
pub mod save;
pub mod screen;

pub use error::{Error, Result};
pub use film::{collect_frames, Film};
pub use montage::{Border, Concat, Overlay, Repeat, Slice};
pub use projector::Projector;
pub use reel::Reel;
pub use save::{save_film, write_film};
pub use screen::Screen;
