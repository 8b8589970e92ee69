//! Theme classification — sorts narrative fragments into supportive and
//! cautionary points with a fixed two-set keyword rule.
//!
//! CRITICAL: when a fragment matches both sets it is SUPPORTIVE. Reports are
//! regression-tested against this tie-break; do not "fix" it here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Keywords that mark a fragment as a strength.
pub const SUPPORTIVE_KEYWORDS: &[&str] = &[
    "excellent",
    "good",
    "positive",
    "benefits",
    "opportunities",
    "growth",
    "culture",
    "team",
    "flexible",
    "supportive",
];

/// Keywords that mark a fragment as a concern.
pub const CAUTIONARY_KEYWORDS: &[&str] = &[
    "concerns",
    "issues",
    "problems",
    "challenges",
    "difficult",
    "poor",
    "negative",
    "lack",
    "limited",
    "management",
];

/// Upper bound on each theme list.
pub const MAX_THEMES: usize = 4;

/// Candidates this short (after trimming) carry no usable theme.
const MIN_CANDIDATE_CHARS: usize = 10;

/// Sentence punctuation followed by an uppercase letter or an opening bracket.
static THEME_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s*[A-Z\[]").expect("theme boundary pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Supportive,
    Cautionary,
}

/// Theme lists in discovery order, each capped at [`MAX_THEMES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Themes {
    pub supportive: Vec<String>,
    pub cautionary: Vec<String>,
}

impl Themes {
    pub fn is_empty(&self) -> bool {
        self.supportive.is_empty() && self.cautionary.is_empty()
    }
}

/// Classifies one fragment.
///
/// Cautionary only when a cautionary keyword matches and no supportive one
/// does. Everything else, including fragments matching neither set, is
/// supportive.
pub fn classify(fragment: &str) -> Theme {
    let lower = fragment.to_lowercase();
    let supportive = contains_any(&lower, SUPPORTIVE_KEYWORDS);
    let cautionary = contains_any(&lower, CAUTIONARY_KEYWORDS);

    if cautionary && !supportive {
        Theme::Cautionary
    } else {
        Theme::Supportive
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Splits the post-headline text into trimmed theme candidates.
///
/// The boundary punctuation is consumed; the uppercase letter or `[` that
/// follows it opens the next candidate. Candidates of
/// [`MIN_CANDIDATE_CHARS`] characters or fewer are dropped.
pub fn split_candidates(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for boundary in THEME_BOUNDARY.find_iter(text) {
        pieces.push(&text[start..boundary.start()]);
        // skip the single-byte punctuation, keep the lookahead text
        start = boundary.start() + 1;
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| piece.chars().count() > MIN_CANDIDATE_CHARS)
        .collect()
}

/// Classifies every candidate in `text` and keeps the first four of each theme.
pub fn extract_themes(text: &str) -> Themes {
    let mut themes = Themes::default();

    for candidate in split_candidates(text) {
        let list = match classify(candidate) {
            Theme::Supportive => &mut themes.supportive,
            Theme::Cautionary => &mut themes.cautionary,
        };
        if list.len() < MAX_THEMES {
            list.push(candidate.to_string());
        }
    }

    themes
}
