use super::*;
use crate::book::BookMetadata;
use crate::tokenizer::{self, ChunkPolicy};

fn make_book() -> Book {
    let policy = ChunkPolicy::default();
    tokenizer::build_book(
        "sample-book",
        BookMetadata {
            title: "Sample".to_string(),
            author: None,
        },
        vec![
            tokenizer::build_chapter(0, "One", &["One two three. Four"], policy),
            tokenizer::build_chapter(1, "Two", &["Five six seven"], policy),
        ],
    )
}

fn loaded() -> PlaybackState {
    let (state, _) = PlaybackState::new(PacingSettings::natural()).reduce(Action::LoadBook(make_book()));
    state
}

#[test]
fn load_book_resets_position_and_cancels() {
    let state = PlaybackState::new(PacingSettings::natural());
    let (state, effects) = state.reduce(Action::LoadBook(make_book()));

    assert_eq!(state.position(), Position::new(0, 0));
    assert!(!state.playing());
    assert_eq!(effects, vec![Effect::CancelScheduled]);
    assert!(state.pace().book.total_minutes > 0.0);
}

#[test]
fn play_schedules_delay_for_current_token() {
    let (state, effects) = loaded().reduce(Action::Play);

    assert!(state.playing());
    // "One" is a short token with no punctuation: base delay only.
    assert_eq!(effects, vec![Effect::ScheduleNextToken { delay_ms: 200 }]);
}

#[test]
fn play_without_book_is_a_noop() {
    let state = PlaybackState::new(PacingSettings::natural());
    let (state, effects) = state.reduce(Action::Play);

    assert!(!state.playing());
    assert!(effects.is_empty());
}

#[test]
fn play_at_final_token_is_a_noop() {
    let (state, _) = loaded().reduce(Action::RestorePosition(Position::new(1, 2)));
    let (state, effects) = state.reduce(Action::Play);

    assert!(!state.playing());
    assert!(effects.is_empty());
}

#[test]
fn pause_stops_and_cancels() {
    let (state, _) = loaded().reduce(Action::Play);
    let (state, effects) = state.reduce(Action::Pause);

    assert!(!state.playing());
    assert_eq!(effects, vec![Effect::CancelScheduled]);
}

#[test]
fn next_token_advances_across_chapter_boundary() {
    let (state, _) = loaded().reduce(Action::RestorePosition(Position::new(0, 3)));
    let (state, effects) = state.reduce(Action::NextToken);

    assert_eq!(state.position(), Position::new(1, 0));
    assert_eq!(
        effects,
        vec![Effect::PersistProgress {
            book_id: "sample-book".to_string(),
            position: Position::new(1, 0),
        }]
    );
}

#[test]
fn next_token_reschedules_while_playing() {
    let (state, _) = loaded().reduce(Action::Play);
    let (state, effects) = state.reduce(Action::NextToken);

    assert_eq!(state.position(), Position::new(0, 1));
    assert!(state.playing());
    assert_eq!(effects.len(), 2);
    assert!(matches!(effects[0], Effect::ScheduleNextToken { .. }));
    assert!(matches!(effects[1], Effect::PersistProgress { .. }));
}

#[test]
fn next_token_at_end_of_book_stops_in_place() {
    let (state, _) = loaded().reduce(Action::RestorePosition(Position::new(1, 1)));
    let (state, _) = state.reduce(Action::Play);
    let (state, _) = state.reduce(Action::NextToken);
    assert!(state.playing());
    assert_eq!(state.position(), Position::new(1, 2));

    let (state, effects) = state.reduce(Action::NextToken);

    assert!(!state.playing());
    assert_eq!(state.position(), Position::new(1, 2));
    assert_eq!(effects, vec![Effect::CancelScheduled]);
}

#[test]
fn previous_token_clamps_at_first_token() {
    let (state, effects) = loaded().reduce(Action::PreviousToken);

    assert_eq!(state.position(), Position::new(0, 0));
    assert!(effects.is_empty());
}

#[test]
fn previous_token_steps_back_across_chapters() {
    let (state, _) = loaded().reduce(Action::RestorePosition(Position::new(1, 0)));
    let (state, effects) = state.reduce(Action::PreviousToken);

    assert_eq!(state.position(), Position::new(0, 3));
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::PersistProgress { .. }));
}

#[test]
fn jump_to_chapter_clamps_and_stops_playback() {
    let (state, _) = loaded().reduce(Action::Play);
    let (state, effects) = state.reduce(Action::JumpToChapter(99));

    assert_eq!(state.position(), Position::new(1, 0));
    assert!(!state.playing());
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::CancelScheduled);
    assert!(matches!(effects[1], Effect::PersistProgress { .. }));
}

#[test]
fn seek_within_chapter_maps_fraction_to_token() {
    let (state, _) = loaded().reduce(Action::SeekWithinChapter(0.5));
    assert_eq!(state.position(), Position::new(0, 2));

    let (state, _) = state.reduce(Action::SeekWithinChapter(1.0));
    assert_eq!(state.position(), Position::new(0, 3));

    let (state, _) = state.reduce(Action::SeekWithinChapter(-4.0));
    assert_eq!(state.position(), Position::new(0, 0));

    let (state, _) = state.reduce(Action::SeekWithinChapter(f32::NAN));
    assert_eq!(state.position(), Position::new(0, 0));
    assert!(!state.playing());
}

#[test]
fn update_setting_clamps_recomputes_and_persists() {
    let state = loaded();
    let wpm_before = state.pace().book.wpm;

    let (state, effects) = state.reduce(Action::UpdateSetting(SettingChange::BaseWpm(9999)));

    assert_eq!(state.settings().base_wpm(), 1500);
    assert_eq!(effects, vec![Effect::PersistSettings(*state.settings())]);
    assert!(state.pace().book.wpm > wpm_before);
}

#[test]
fn restore_position_emits_no_persist_effect() {
    let (state, effects) = loaded().reduce(Action::RestorePosition(Position::new(1, 1)));

    assert_eq!(state.position(), Position::new(1, 1));
    assert!(effects.is_empty());
}

#[test]
fn restore_position_clamps_out_of_range_targets() {
    let (state, _) = loaded().reduce(Action::RestorePosition(Position::new(42, 42)));
    assert_eq!(state.position(), Position::new(1, 2));
}

#[test]
fn restart_book_returns_to_start() {
    let (state, _) = loaded().reduce(Action::RestorePosition(Position::new(1, 2)));
    let (state, _) = state.reduce(Action::Play);
    let (state, effects) = state.reduce(Action::RestartBook);

    assert_eq!(state.position(), Position::new(0, 0));
    assert!(!state.playing());
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::CancelScheduled);
    assert!(matches!(effects[1], Effect::PersistProgress { .. }));
}

#[test]
fn reduce_is_pure() {
    let state = loaded();
    let actions = [
        Action::Play,
        Action::NextToken,
        Action::JumpToChapter(1),
        Action::SeekWithinChapter(0.7),
        Action::UpdateSetting(SettingChange::ClausePauseMs(90)),
        Action::RestartBook,
    ];

    for action in actions {
        let first = state.clone().reduce(action.clone());
        let second = state.clone().reduce(action);
        assert_eq!(first, second);
    }
}

#[test]
fn pace_cache_tracks_position() {
    let state = loaded();
    let fresh_remaining = state.pace().book.minutes_remaining;

    let (state, _) = state.reduce(Action::RestorePosition(Position::new(1, 1)));
    assert!(state.pace().book.minutes_remaining < fresh_remaining);
    assert!(
        state.pace().chapter.minutes_remaining < state.pace().chapter.total_minutes
    );
}
