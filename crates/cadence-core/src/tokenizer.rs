//! Text tokenization with pre-computed pacing metadata.
//!
//! Raw paragraph text is reduced to display tokens. Words that do not
//! fit the configured chunk width are split at morpheme boundaries
//! (greedy affix matching, falling back to fixed-width windows) so that
//! every emitted token fits the display. Removing the marker hyphens
//! from a word's fragments reconstructs the word exactly.

use core::ops::RangeInclusive;

use crate::book::{Book, BookMetadata, Chapter, LengthBucket, Punctuation, Token};

/// Smallest fragment worth emitting. Affix matches shorter than this are
/// ignored, and a degenerate middle forces the shorter affix to be
/// dropped.
pub const MIN_FRAGMENT_CHARS: usize = 3;

/// Common English prefixes, sorted by length descending so longer
/// prefixes match first ("inter" before "int"). Entries shorter than
/// [`MIN_FRAGMENT_CHARS`] are excluded.
const PREFIXES: &[&str] = &[
    "counter", "extra", "hyper", "inter", "micro", "multi", "super", "trans", "ultra", "under",
    "anti", "auto", "mono", "over", "poly", "post", "semi", "tele", "dis", "mid", "mis", "non",
    "out", "pre", "pro", "sub", "tri",
];

/// Common English suffixes, sorted by length descending.
const SUFFIXES: &[&str] = &[
    "ization", "isation", "ational", "ative", "itive", "ical", "ious", "eous", "tion", "sion",
    "ness", "ment", "able", "ible", "less", "ence", "ance", "ful", "ous", "ive", "ial", "ing",
    "ity", "ety", "ize", "ise", "ify", "ent", "ant",
];

/// Chunk-width configuration for the tokenizer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChunkPolicy {
    max_chunk_chars: usize,
}

impl ChunkPolicy {
    pub const DEFAULT_MAX_CHUNK_CHARS: usize = 10;
    pub const MAX_CHUNK_RANGE: RangeInclusive<usize> = 6..=24;

    /// Out-of-range widths are clamped, never rejected.
    pub fn new(max_chunk_chars: usize) -> Self {
        Self {
            max_chunk_chars: max_chunk_chars
                .clamp(*Self::MAX_CHUNK_RANGE.start(), *Self::MAX_CHUNK_RANGE.end()),
        }
    }

    pub const fn max_chunk_chars(self) -> usize {
        self.max_chunk_chars
    }
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CHUNK_CHARS)
    }
}

/// Tokenize one paragraph of text.
pub fn tokenize(text: &str, policy: ChunkPolicy) -> Vec<Token> {
    let mut tokens = Vec::new();
    for raw in text.split_whitespace() {
        push_word(raw, policy, &mut tokens);
    }
    tokens
}

/// Tokenize a sequence of paragraphs. The final token of every
/// paragraph except the last is upgraded from `None` to
/// `ParagraphBreak`; a stronger class already present is kept.
pub fn tokenize_paragraphs(paragraphs: &[&str], policy: ChunkPolicy) -> Vec<Token> {
    let mut all = Vec::new();
    let count = paragraphs.len();

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let start = all.len();
        all.extend(tokenize(paragraph, policy));

        if index + 1 < count && all.len() > start {
            if let Some(last) = all.last_mut() {
                if last.punctuation == Punctuation::None {
                    last.punctuation = Punctuation::ParagraphBreak;
                }
            }
        }
    }

    all
}

/// Build a chapter from paragraph text, attaching stats at construction.
pub fn build_chapter(index: u32, title: &str, paragraphs: &[&str], policy: ChunkPolicy) -> Chapter {
    Chapter::new(index, title.to_string(), tokenize_paragraphs(paragraphs, policy))
}

/// Build a book from already-built chapters.
pub fn build_book(id: &str, metadata: BookMetadata, chapters: Vec<Chapter>) -> Book {
    Book::new(id.to_string(), metadata, chapters)
}

fn push_word(raw: &str, policy: ChunkPolicy, out: &mut Vec<Token>) {
    let Some((leading, core, trailing)) = strip_decorations(raw) else {
        // Nothing alphanumeric left: a dash, ellipsis, stray quote.
        return;
    };

    let core_len = core.chars().count();
    let punctuation = raw
        .chars()
        .last()
        .map_or(Punctuation::None, Punctuation::classify);

    if core_len <= policy.max_chunk_chars() {
        out.push(Token {
            text: raw.to_string(),
            bucket: LengthBucket::from_len(core_len),
            punctuation,
        });
        return;
    }

    split_word(leading, core, core_len, trailing, punctuation, policy, out);
}

/// Split `raw` into (leading decoration, core, trailing decoration).
/// The core runs from the first to the last alphanumeric character, so
/// interior apostrophes and hyphens are retained. `None` when the word
/// holds no alphanumeric characters at all.
fn strip_decorations(raw: &str) -> Option<(&str, &str, &str)> {
    let start = raw
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, _)| i)?;
    let (last, c) = raw
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())?;
    let end = last + c.len_utf8();
    Some((&raw[..start], &raw[start..end], &raw[end..]))
}

/// Byte offset of the `chars`-th character of `s` (or `s.len()`).
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// Longest table entry the lowercased core starts with, subject to the
/// fragment-size bounds. Returns the match length in characters, 0 when
/// nothing usable matches.
fn match_prefix(core_lower: &str, core_len: usize, policy: ChunkPolicy) -> usize {
    for prefix in PREFIXES {
        let len = prefix.len();
        if len <= policy.max_chunk_chars()
            && len + MIN_FRAGMENT_CHARS <= core_len
            && core_lower.starts_with(prefix)
        {
            return len;
        }
    }
    0
}

fn match_suffix(core_lower: &str, core_len: usize, policy: ChunkPolicy) -> usize {
    for suffix in SUFFIXES {
        let len = suffix.len();
        if len <= policy.max_chunk_chars()
            && len + MIN_FRAGMENT_CHARS <= core_len
            && core_lower.ends_with(suffix)
        {
            return len;
        }
    }
    0
}

fn split_word(
    leading: &str,
    core: &str,
    core_len: usize,
    trailing: &str,
    punctuation: Punctuation,
    policy: ChunkPolicy,
    out: &mut Vec<Token>,
) {
    let core_lower = core.to_lowercase();
    let mut p = match_prefix(&core_lower, core_len, policy);
    let mut s = match_suffix(&core_lower, core_len, policy);

    // Independently matched affixes may overlap or pinch the middle
    // below the minimum fragment size. Drop the shorter one.
    if p > 0 && s > 0 && core_len < p + s + MIN_FRAGMENT_CHARS {
        if p < s {
            p = 0;
        } else {
            s = 0;
        }
    }

    let prefix_end = byte_offset(core, p);
    let suffix_start = byte_offset(core, core_len - s);
    let prefix_text = &core[..prefix_end];
    let mut middle = &core[prefix_end..suffix_start];
    let suffix_text = &core[suffix_start..];

    // Stage (text, visible char count) pairs; punctuation classes are
    // assigned once the final fragment is known.
    let mut staged: Vec<(String, usize)> = Vec::new();

    if p > 0 {
        staged.push((format!("{leading}{prefix_text}-"), p));
    }

    let mut first_window = true;
    while !middle.is_empty() {
        let cut = byte_offset(middle, policy.max_chunk_chars());
        let window = &middle[..cut];
        middle = &middle[cut..];

        let window_len = window.chars().count();
        let lead = if first_window && p == 0 { leading } else { "-" };
        let tail = if middle.is_empty() && s == 0 { trailing } else { "-" };
        staged.push((format!("{lead}{window}{tail}"), window_len));
        first_window = false;
    }

    if s > 0 {
        staged.push((format!("-{suffix_text}{trailing}"), s));
    }

    let last = staged.len().saturating_sub(1);
    for (index, (text, visible_len)) in staged.into_iter().enumerate() {
        // Only the fragment ending the split carries the word's
        // punctuation class.
        let punct = if index == last {
            punctuation
        } else {
            Punctuation::None
        };
        out.push(Token {
            text,
            bucket: LengthBucket::from_len(visible_len),
            punctuation: punct,
        });
    }
}
