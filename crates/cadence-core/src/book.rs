//! Immutable book model: tokens, chapters, and reading positions.
//!
//! Everything here is built once by the tokenizer and never mutated
//! afterwards. A chunk-width change requires rebuilding the book from
//! source text upstream.

use serde::{Deserialize, Serialize};

use crate::stats::{BookStats, ChapterStats};

/// Coarse classification of a token's alphanumeric length.
///
/// Buckets keep the pacing model O(1): per-token delays depend only on
/// the bucket, so aggregate timing reduces to four counters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum LengthBucket {
    Short = 0,    // 1-4 chars
    Medium = 1,   // 5-8 chars
    Long = 2,     // 9-12 chars
    VeryLong = 3, // 13+ chars
}

impl LengthBucket {
    pub fn from_len(len: usize) -> Self {
        match len {
            0..=4 => LengthBucket::Short,
            5..=8 => LengthBucket::Medium,
            9..=12 => LengthBucket::Long,
            _ => LengthBucket::VeryLong,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Punctuation class following a token, used for pause insertion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Punctuation {
    None = 0,
    ClauseBreak = 1,    // , ; :
    SentenceEnd = 2,    // . ! ?
    ParagraphBreak = 3, // end of paragraph
}

impl Punctuation {
    pub fn classify(c: char) -> Self {
        match c {
            '.' | '!' | '?' => Punctuation::SentenceEnd,
            ',' | ';' | ':' => Punctuation::ClauseBreak,
            _ => Punctuation::None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One displayable unit of text with pre-computed pacing metadata.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub text: String,
    pub bucket: LengthBucket,
    pub punctuation: Punctuation,
}

impl Token {
    /// Whether this token is a piece of a word that was split to fit the
    /// display width. Marker hyphens are part of `text`: a leading hyphen
    /// marks a continuation, a trailing hyphen (with no punctuation
    /// following) marks that the word continues.
    pub fn is_split_fragment(&self) -> bool {
        self.text.starts_with('-')
            || (self.text.ends_with('-') && self.punctuation == Punctuation::None)
    }
}

/// A chapter with its tokens and stats, computed once at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chapter {
    pub index: u32,
    pub title: String,
    pub tokens: Vec<Token>,
    pub stats: ChapterStats,
}

impl Chapter {
    pub fn new(index: u32, title: String, tokens: Vec<Token>) -> Self {
        let stats = ChapterStats::from_tokens(&tokens);
        Self {
            index,
            title,
            tokens,
            stats,
        }
    }

    pub fn token_count(&self) -> u32 {
        self.tokens.len() as u32
    }
}

/// Book metadata as provided by the external container parser.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    pub author: Option<String>,
}

/// A reading location. Always kept valid (clamped) for the current book.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub chapter: u32,
    pub token: u32,
}

impl Position {
    pub const fn new(chapter: u32, token: u32) -> Self {
        Self { chapter, token }
    }
}

/// A fully tokenized book ready for playback.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Book {
    pub id: String,
    pub metadata: BookMetadata,
    pub chapters: Vec<Chapter>,
    pub stats: BookStats,
}

impl Book {
    pub fn new(id: String, metadata: BookMetadata, chapters: Vec<Chapter>) -> Self {
        let stats = BookStats::from_chapters(&chapters);
        Self {
            id,
            metadata,
            chapters,
            stats,
        }
    }

    pub fn chapter(&self, index: u32) -> Option<&Chapter> {
        self.chapters.get(index as usize)
    }

    pub fn token_at(&self, position: Position) -> Option<&Token> {
        self.chapter(position.chapter)?
            .tokens
            .get(position.token as usize)
    }

    pub fn token_count(&self) -> u32 {
        self.stats.aggregated.token_count
    }

    /// First position holding a token, or the origin for an empty book.
    pub fn start_position(&self) -> Position {
        for (index, chapter) in self.chapters.iter().enumerate() {
            if !chapter.tokens.is_empty() {
                return Position::new(index as u32, 0);
            }
        }
        Position::default()
    }

    /// Nearest valid position for this book. Out-of-range chapter and
    /// token indices are clamped, never rejected.
    pub fn clamp_position(&self, position: Position) -> Position {
        if self.chapters.is_empty() {
            return Position::default();
        }

        let chapter = position
            .chapter
            .min(self.chapters.len() as u32 - 1);
        let len = self.chapters[chapter as usize].token_count();
        let token = position.token.min(len.saturating_sub(1));
        Position::new(chapter, token)
    }

    /// Next token position, stepping into the next non-empty chapter at
    /// a chapter boundary. `None` at the end of the book.
    pub fn next_position(&self, position: Position) -> Option<Position> {
        let chapter = self.chapter(position.chapter)?;
        if position.token + 1 < chapter.token_count() {
            return Some(Position::new(position.chapter, position.token + 1));
        }

        let mut next = position.chapter as usize + 1;
        while let Some(candidate) = self.chapters.get(next) {
            if !candidate.tokens.is_empty() {
                return Some(Position::new(next as u32, 0));
            }
            next += 1;
        }
        None
    }

    /// Previous token position. `None` at the very first token.
    pub fn previous_position(&self, position: Position) -> Option<Position> {
        if position.token > 0 {
            return Some(Position::new(position.chapter, position.token - 1));
        }

        let mut prev = position.chapter as usize;
        while prev > 0 {
            prev -= 1;
            let candidate = &self.chapters[prev];
            if !candidate.tokens.is_empty() {
                return Some(Position::new(prev as u32, candidate.token_count() - 1));
            }
        }
        None
    }

    /// Whether `position` sits on the final token of the final non-empty
    /// chapter (or the book holds no tokens at all).
    pub fn is_final_position(&self, position: Position) -> bool {
        self.next_position(position).is_none()
    }
}
