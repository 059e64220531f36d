//! Built-in sample content for the reference executor.

use cadence_core::{Book, BookMetadata, ChunkPolicy, tokenizer};

const CHAPTER_ONE: [&str; 2] = [
    "The lighthouse keeper kept a notebook of impossible words. Internationalization sat at the \
top of the first page, followed by incomprehensibility and, in smaller handwriting, \
counterproductive. He collected them the way other people collected shells: patiently, \
indiscriminately, and with no intention of ever letting one go.",
    "Visitors asked why. He would shrug, point at the lamp turning overhead, and explain that a \
beam sweeping the sea shows one thing at a time; a reader is no different. Give the eye a single \
word, give the long ones room to breathe, and even the most unpronounceable vocabulary becomes \
hospitable.",
];

const CHAPTER_TWO: [&str; 2] = [
    "In the morning the fog lifted, and the keeper read aloud from his notebook to the gulls: \
misunderstanding, overcapitalization, straightforwardness. The birds were unimpressed. Still, he \
timed each word against the turning of the lamp, trimming a beat here, adding a pause there, \
until the rhythm matched the swell below the rocks.",
    "By evening he had a system: short words flicked past, long words lingered, and every sentence \
ended with a breath. He wrote the rules on the last page, closed the notebook, and went up to \
light the lamp.",
];

pub fn sample_book() -> Book {
    let policy = ChunkPolicy::default();
    tokenizer::build_book(
        "lighthouse-notebook",
        BookMetadata {
            title: "The Keeper's Notebook".to_string(),
            author: Some("Anonymous".to_string()),
        },
        vec![
            tokenizer::build_chapter(0, "Impossible Words", &CHAPTER_ONE, policy),
            tokenizer::build_chapter(1, "A System", &CHAPTER_TWO, policy),
        ],
    )
}
