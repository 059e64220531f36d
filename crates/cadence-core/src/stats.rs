//! Aggregate token counters.
//!
//! A chapter's stats are a fixed-size reduction of its token stream;
//! book stats are the elementwise sum of chapter stats. Keeping the
//! reduction associative is what makes whole-book pace recomputation
//! O(chapters) instead of O(tokens).

use core::ops::{Add, AddAssign};

use crate::book::{Chapter, Token};

/// Fixed-size counters for one chapter (or any token sequence).
///
/// Invariants: the length counters sum to `token_count`, and the
/// punctuation counters (including "none") sum to `token_count`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ChapterStats {
    pub token_count: u32,
    /// Indexed by [`LengthBucket::index`]: short, medium, long, very long.
    pub length_counts: [u32; 4],
    /// Indexed by [`Punctuation::index`]: none, clause, sentence, paragraph.
    pub punct_counts: [u32; 4],
    pub split_fragments: u32,
}

impl ChapterStats {
    /// Single O(n) pass over a token sequence.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut stats = ChapterStats::default();
        for token in tokens {
            stats.record(token);
        }
        stats
    }

    pub fn record(&mut self, token: &Token) {
        self.token_count += 1;
        self.length_counts[token.bucket.index()] += 1;
        self.punct_counts[token.punctuation.index()] += 1;
        if token.is_split_fragment() {
            self.split_fragments += 1;
        }
    }

    pub fn merge(&mut self, other: &ChapterStats) {
        self.token_count += other.token_count;
        for i in 0..4 {
            self.length_counts[i] += other.length_counts[i];
            self.punct_counts[i] += other.punct_counts[i];
        }
        self.split_fragments += other.split_fragments;
    }
}

impl Add for ChapterStats {
    type Output = ChapterStats;

    fn add(mut self, other: ChapterStats) -> ChapterStats {
        self.merge(&other);
        self
    }
}

impl AddAssign for ChapterStats {
    fn add_assign(&mut self, other: ChapterStats) {
        self.merge(&other);
    }
}

/// Book-level stats: the per-chapter list plus its elementwise sum.
///
/// The per-chapter list is kept so a book-scope consumed-token count can
/// be derived without rescanning any token stream.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BookStats {
    pub per_chapter: Vec<ChapterStats>,
    pub aggregated: ChapterStats,
}

impl BookStats {
    /// Sums already-computed chapter stats. O(chapters), never O(tokens).
    pub fn from_chapters(chapters: &[Chapter]) -> Self {
        let per_chapter: Vec<ChapterStats> = chapters.iter().map(|c| c.stats).collect();
        let mut aggregated = ChapterStats::default();
        for stats in &per_chapter {
            aggregated.merge(stats);
        }
        Self {
            per_chapter,
            aggregated,
        }
    }

    /// Number of tokens in chapters preceding `chapter`.
    pub fn tokens_before_chapter(&self, chapter: u32) -> u32 {
        self.per_chapter
            .iter()
            .take(chapter as usize)
            .map(|stats| stats.token_count)
            .sum()
    }
}
