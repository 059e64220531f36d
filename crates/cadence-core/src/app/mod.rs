//! Playback state machine for RSVP reading sessions.
//!
//! [`PlaybackState::reduce`] is a pure reducer: it consumes the current
//! state plus one action and returns the replacement state and a list
//! of declarative [`Effect`]s. The core performs no I/O; an external
//! executor interprets the effects. `reduce` must be driven from a
//! single owner and calls must not overlap. At most one scheduled delay
//! is ever pending: a new schedule supersedes the previous one, and
//! cancelling with nothing pending is a no-op.

use log::debug;

use crate::book::{Book, Position, Token};
use crate::pacing::{self, PaceSnapshot};
use crate::settings::{PacingSettings, SettingChange};

/// Closed set of playback, navigation, settings, and content events.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Play,
    Pause,
    NextToken,
    PreviousToken,
    JumpToChapter(u32),
    SeekWithinChapter(f32),
    UpdateSetting(SettingChange),
    LoadBook(Book),
    RestorePosition(Position),
    RestartBook,
}

/// Declarative side-effect descriptions. Data only; never executed by
/// the core itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ScheduleNextToken { delay_ms: u32 },
    CancelScheduled,
    PersistProgress { book_id: String, position: Position },
    PersistSettings(PacingSettings),
}

/// The only mutable entity in the core. Replaced wholesale on every
/// transition, never mutated in place by callers.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    book: Option<Book>,
    position: Position,
    settings: PacingSettings,
    playing: bool,
    pace: PaceSnapshot,
}

impl PlaybackState {
    pub fn new(settings: PacingSettings) -> Self {
        Self {
            book: None,
            position: Position::default(),
            settings,
            playing: false,
            pace: PaceSnapshot::idle(&settings),
        }
    }

    pub fn book(&self) -> Option<&Book> {
        self.book.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn settings(&self) -> &PacingSettings {
        &self.settings
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn pace(&self) -> &PaceSnapshot {
        &self.pace
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.book.as_ref()?.token_at(self.position)
    }

    /// Apply one action. Every transition that changes position,
    /// settings, or content recomputes the cached pace synchronously.
    pub fn reduce(self, action: Action) -> (Self, Vec<Effect>) {
        match action {
            Action::Play => self.play(),
            Action::Pause => self.pause(),
            Action::NextToken => self.next_token(),
            Action::PreviousToken => self.previous_token(),
            Action::JumpToChapter(index) => self.jump_to_chapter(index),
            Action::SeekWithinChapter(fraction) => self.seek_within_chapter(fraction),
            Action::UpdateSetting(change) => self.update_setting(change),
            Action::LoadBook(book) => self.load_book(book),
            Action::RestorePosition(position) => self.restore_position(position),
            Action::RestartBook => self.restart_book(),
        }
    }

    fn refresh_pace(&mut self) {
        self.pace = match self.book.as_ref() {
            Some(book) => pacing::effective_pace_info(book, self.position, &self.settings),
            None => PaceSnapshot::idle(&self.settings),
        };
    }

    fn persist_progress(&self) -> Effect {
        Effect::PersistProgress {
            book_id: self
                .book
                .as_ref()
                .map(|book| book.id.clone())
                .unwrap_or_default(),
            position: self.position,
        }
    }

    /// Delay for the token at `position`, when it exists.
    fn schedule_for(&self, position: Position) -> Option<Effect> {
        let token = self.book.as_ref()?.token_at(position)?;
        Some(Effect::ScheduleNextToken {
            delay_ms: pacing::delay_for(token, &self.settings),
        })
    }
}

include!("playback.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
