//! Reference effect executor for the cadence core.
//!
//! Owns the single `PlaybackState`, interprets the reducer's declarative
//! effects (timer scheduling, debounced persistence), and prints tokens
//! to stdout. This binary is the "external executor" the core is
//! designed against; it is not a product UI.

use cadence_core::{Action, PacingSettings, PlaybackState, SettingChange};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[path = "main/interpreter.rs"]
mod interpreter;
#[path = "main/sample.rs"]
mod sample;

const DEMO_WPM: u16 = 900;

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let book = sample::sample_book();
    info!(
        "sample book: {:?}, {} chapters, {} tokens",
        book.metadata.title,
        book.chapters.len(),
        book.token_count()
    );

    let state = PlaybackState::new(PacingSettings::natural());
    let mut session = interpreter::Session::new(state);

    session.dispatch(Action::LoadBook(book));
    session.dispatch(Action::UpdateSetting(SettingChange::BaseWpm(DEMO_WPM)));
    session.dispatch(Action::Play);
    session.run_to_end();
}
