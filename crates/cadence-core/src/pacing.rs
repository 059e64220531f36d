//! Pacing model: per-token delays and O(1) effective pace.
//!
//! The per-token delay adds fixed per-bucket, per-punctuation, and
//! split-fragment extras on top of the base word delay. Because every
//! extra is a fixed per-class value, the total time of an arbitrary
//! scope is a dot product of the aggregate counters with the settings,
//! never an iteration over tokens.

use crate::book::{Book, LengthBucket, Position, Punctuation, Token};
use crate::settings::PacingSettings;
use crate::stats::ChapterStats;

/// Throughput actually experienced after all timing adjustments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectivePace {
    pub wpm: u32,
    pub total_minutes: f64,
    pub minutes_remaining: f64,
}

/// Cached chapter-scope and book-scope pace, recomputed on every
/// position, settings, or content transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaceSnapshot {
    pub chapter: EffectivePace,
    pub book: EffectivePace,
}

impl PaceSnapshot {
    /// Snapshot for a session with no book loaded.
    pub fn idle(settings: &PacingSettings) -> Self {
        let empty = effective_pace(&ChapterStats::default(), settings, 0);
        Self {
            chapter: empty,
            book: empty,
        }
    }
}

/// Display delay for one token, in milliseconds.
///
/// `base_wpm` is positive by construction, so the division is safe.
pub fn delay_for(token: &Token, settings: &PacingSettings) -> u32 {
    let base = 60_000 / u32::from(settings.base_wpm());

    let length = match token.bucket {
        LengthBucket::Short | LengthBucket::Medium => 0,
        LengthBucket::Long => u32::from(settings.long_extra_ms()),
        LengthBucket::VeryLong => u32::from(settings.very_long_extra_ms()),
    };

    let pause = match token.punctuation {
        Punctuation::None => 0,
        Punctuation::ClauseBreak => u32::from(settings.clause_pause_ms()),
        Punctuation::SentenceEnd => u32::from(settings.sentence_pause_ms()),
        Punctuation::ParagraphBreak => u32::from(settings.paragraph_pause_ms()),
    };

    let fragment = if token.is_split_fragment() {
        u32::from(settings.fragment_extra_ms())
    } else {
        0
    };

    base + length + pause + fragment
}

/// Effective pace for a scope described by aggregate counters.
///
/// O(1): multiplies each counter by its per-unit delay. An empty scope
/// reports the configured base pace and zero time rather than dividing
/// by zero.
pub fn effective_pace(
    stats: &ChapterStats,
    settings: &PacingSettings,
    tokens_consumed: u32,
) -> EffectivePace {
    if stats.token_count == 0 {
        return EffectivePace {
            wpm: u32::from(settings.base_wpm()),
            total_minutes: 0.0,
            minutes_remaining: 0.0,
        };
    }

    // The base term stays fractional so that zeroing every extra makes
    // the effective pace reproduce the configured base pace exactly,
    // for any base value.
    let base = 60_000.0 / f64::from(settings.base_wpm());
    let mut total_ms = f64::from(stats.token_count) * base;
    total_ms += f64::from(stats.length_counts[LengthBucket::Long.index()])
        * f64::from(settings.long_extra_ms());
    total_ms += f64::from(stats.length_counts[LengthBucket::VeryLong.index()])
        * f64::from(settings.very_long_extra_ms());
    total_ms += f64::from(stats.punct_counts[Punctuation::ClauseBreak.index()])
        * f64::from(settings.clause_pause_ms());
    total_ms += f64::from(stats.punct_counts[Punctuation::SentenceEnd.index()])
        * f64::from(settings.sentence_pause_ms());
    total_ms += f64::from(stats.punct_counts[Punctuation::ParagraphBreak.index()])
        * f64::from(settings.paragraph_pause_ms());
    total_ms += f64::from(stats.split_fragments) * f64::from(settings.fragment_extra_ms());

    // total_ms is at least token_count * base > 0.
    let wpm = (f64::from(stats.token_count) * 60_000.0 / total_ms).round() as u32;
    let total_minutes = total_ms / 60_000.0;

    let unconsumed = stats.token_count.saturating_sub(tokens_consumed);
    let minutes_remaining =
        total_minutes * f64::from(unconsumed) / f64::from(stats.token_count);

    EffectivePace {
        wpm,
        total_minutes,
        minutes_remaining,
    }
}

/// Chapter-scope and book-scope pace for the current position.
///
/// An out-of-range chapter index resolves to a zero-stats sentinel. The
/// book-scope consumed count is the token counts of preceding chapters
/// plus the within-chapter offset, derived from the per-chapter stats
/// list without touching any token stream.
pub fn effective_pace_info(
    book: &Book,
    position: Position,
    settings: &PacingSettings,
) -> PaceSnapshot {
    let zero = ChapterStats::default();
    let chapter_stats = book
        .chapter(position.chapter)
        .map_or(&zero, |chapter| &chapter.stats);

    let chapter = effective_pace(chapter_stats, settings, position.token);

    let consumed_in_book = book.stats.tokens_before_chapter(position.chapter) + position.token;
    let book_scope = effective_pace(&book.stats.aggregated, settings, consumed_in_book);

    PaceSnapshot {
        chapter,
        book: book_scope,
    }
}
