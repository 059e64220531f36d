//! Single-owner interpreter loop for reducer effects.

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use cadence_core::{
    Action, Effect, PacingSettings, PlaybackState, Position, ProgressStore, SettingsStore,
};
use log::info;

/// Rapid repeated changes (slider drags, held keys) collapse into one
/// write per window.
const PERSIST_DEBOUNCE: Duration = Duration::from_millis(500);

const PACE_LOG_EVERY: u32 = 50;

/// In-memory settings backend that logs each write.
#[derive(Default)]
struct MemorySettingsStore {
    saved: Option<PacingSettings>,
}

impl SettingsStore for MemorySettingsStore {
    type Error = ();

    fn load(&mut self) -> Result<Option<PacingSettings>, Self::Error> {
        Ok(self.saved)
    }

    fn save(&mut self, settings: &PacingSettings) -> Result<(), Self::Error> {
        self.saved = Some(*settings);
        info!("settings persisted: base {} wpm", settings.base_wpm());
        Ok(())
    }
}

/// In-memory progress backend keyed by book id.
#[derive(Default)]
struct MemoryProgressStore {
    saved: HashMap<String, Position>,
}

impl ProgressStore for MemoryProgressStore {
    type Error = ();

    fn load(&mut self, book_id: &str) -> Result<Option<Position>, Self::Error> {
        Ok(self.saved.get(book_id).copied())
    }

    fn save(&mut self, book_id: &str, position: Position) -> Result<(), Self::Error> {
        self.saved.insert(book_id.to_string(), position);
        Ok(())
    }
}

/// Owns the current state and the one pending delay. All `reduce` calls
/// go through here, which gives the reducer its single-writer
/// discipline.
pub struct Session {
    state: Option<PlaybackState>,
    deadline: Option<Instant>,
    pending_progress: Option<(String, Position)>,
    pending_settings: Option<PacingSettings>,
    last_persist: Instant,
    settings_store: MemorySettingsStore,
    progress_store: MemoryProgressStore,
    tokens_shown: u32,
}

impl Session {
    pub fn new(state: PlaybackState) -> Self {
        Self {
            state: Some(state),
            deadline: None,
            pending_progress: None,
            pending_settings: None,
            last_persist: Instant::now(),
            settings_store: MemorySettingsStore::default(),
            progress_store: MemoryProgressStore::default(),
            tokens_shown: 0,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let Some(state) = self.state.take() else {
            return;
        };
        let (next, effects) = state.reduce(action);
        self.state = Some(next);
        self.apply_effects(effects);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleNextToken { delay_ms } => {
                    // A new schedule supersedes any pending one.
                    self.deadline =
                        Some(Instant::now() + Duration::from_millis(u64::from(delay_ms)));
                }
                Effect::CancelScheduled => {
                    // Idempotent: cancelling with nothing pending is fine.
                    self.deadline = None;
                }
                Effect::PersistProgress { book_id, position } => {
                    self.pending_progress = Some((book_id, position));
                }
                Effect::PersistSettings(settings) => {
                    self.pending_settings = Some(settings);
                }
            }
        }
        self.flush_persistence(false);
    }

    fn flush_persistence(&mut self, force: bool) {
        if !force && self.last_persist.elapsed() < PERSIST_DEBOUNCE {
            return;
        }
        if self.pending_progress.is_none() && self.pending_settings.is_none() {
            return;
        }

        if let Some((book_id, position)) = self.pending_progress.take() {
            let _ = self.progress_store.save(&book_id, position);
        }
        if let Some(settings) = self.pending_settings.take() {
            let _ = self.settings_store.save(&settings);
        }
        self.last_persist = Instant::now();
    }

    fn show_current_token(&mut self) {
        let (text, pace) = {
            let Some(state) = self.state.as_ref() else {
                return;
            };
            let Some(token) = state.current_token() else {
                return;
            };
            (token.text.clone(), *state.pace())
        };

        println!("{text:>28}");
        self.tokens_shown += 1;

        if self.tokens_shown % PACE_LOG_EVERY == 0 {
            info!(
                "effective pace {} wpm, {:.2} min remaining in book",
                pace.book.wpm, pace.book.minutes_remaining
            );
        }
    }

    /// Drive playback until the reducer stops scheduling, then flush
    /// what persistence is still pending.
    pub fn run_to_end(&mut self) {
        self.show_current_token();

        while let Some(deadline) = self.deadline {
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
            self.deadline = None;

            self.dispatch(Action::NextToken);
            if self.state.as_ref().is_some_and(PlaybackState::playing) {
                self.show_current_token();
            }
        }

        self.flush_persistence(true);

        if let Some(state) = self.state.as_ref() {
            let pace = state.pace();
            info!(
                "finished: {} tokens shown, book pace {} wpm over {:.2} min",
                self.tokens_shown, pace.book.wpm, pace.book.total_minutes
            );
        }
    }
}
