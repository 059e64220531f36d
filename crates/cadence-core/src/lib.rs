//! Cadence core — tokenization and pacing for rapid serial visual
//! presentation (RSVP) reading.
//!
//! The crate is a pure core: raw paragraph text goes in, typed tokens
//! with pre-computed stats come out, and a reducer-style state machine
//! sequences playback over them. Pacing for any scope is O(1) thanks to
//! the fixed-size aggregate counters. No I/O happens here; timers and
//! persistence are described as [`app::Effect`] values for an external
//! executor.

pub mod app;
pub mod book;
pub mod pacing;
pub mod settings;
pub mod stats;
pub mod tokenizer;

pub use app::{Action, Effect, PlaybackState};
pub use book::{Book, BookMetadata, Chapter, LengthBucket, Position, Punctuation, Token};
pub use pacing::{EffectivePace, PaceSnapshot};
pub use settings::{PacingSettings, ProgressStore, SettingChange, SettingsStore};
pub use stats::{BookStats, ChapterStats};
pub use tokenizer::ChunkPolicy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_flows_through_to_playback() {
        let policy = ChunkPolicy::default();
        let book = tokenizer::build_book(
            "integration",
            BookMetadata {
                title: "Integration".to_string(),
                author: None,
            },
            vec![tokenizer::build_chapter(
                0,
                "Only",
                &["Hello, world! This is a short integration test."],
                policy,
            )],
        );

        let state = PlaybackState::new(PacingSettings::natural());
        let (state, _) = state.reduce(Action::LoadBook(book));
        let (state, effects) = state.reduce(Action::Play);

        assert!(state.playing());
        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleNextToken { .. }]
        ));
        assert_eq!(state.current_token().unwrap().text, "Hello,");
    }
}
