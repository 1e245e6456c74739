use montage::samples::Diagonal;
use montage::{save_film, Film, Projector, Reel};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // The walk, framed, with a title stuck on its first five frames,
    // followed by its second half played back twice.
    let title = Reel::from_texts(&["fou"]).repeat(5);
    let mut film = Diagonal::new()
        .overlay(title, 0, 7)
        .bordered()
        .then(Diagonal::new().slice(10, 19).repeat(2));

    if let Err(err) = Projector::default().project(&mut film) {
        eprintln!("projection failed: {}", err);
        return ExitCode::FAILURE;
    }

    film.rewind();
    match save_film(&mut film, "diagonal.txt") {
        Ok(frames) => {
            println!("{} frames saved to 'diagonal.txt'", frames);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("'diagonal.txt' could not be created: {}", err);
            ExitCode::FAILURE
        }
    }
}
