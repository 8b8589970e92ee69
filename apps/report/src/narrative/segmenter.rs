//! Sentence segmentation for narrative text.
//!
//! A boundary is `.`, `!` or `?` followed by whitespace. The punctuation stays
//! with the sentence it ends; the whitespace run is consumed.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Splits `text` into sentences, borrowing from the input.
///
/// Always returns at least one element; `""` yields `[""]`.
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // terminal punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
}
