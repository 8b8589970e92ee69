//! Citation resolution — turns `[n]` markers inside narrative text into
//! citation tokens the render adapter can make interactive.
//!
//! Resolution never fails. A marker whose index is not in the map (or cannot
//! be an index at all) stays in the output as literal text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Degradation;
use crate::models::citation::{CitationIndex, CitationMap, CitationRecord};

/// `[` + ASCII digits + `]`. Unicode digits are deliberately not markers.
static CITATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[0-9]+\]").expect("citation marker pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    Literal {
        text: String,
    },
    Citation {
        index: CitationIndex,
        record: CitationRecord,
    },
}

pub type TokenSequence = Vec<Token>;

impl Token {
    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal { text: text.into() }
    }

    /// The text this token stands for in the source narrative.
    pub fn source_text(&self) -> String {
        match self {
            Token::Literal { text } => text.clone(),
            Token::Citation { index, .. } => format!("[{index}]"),
        }
    }
}

/// One piece of a marker split, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(&'a str),
    Marker(&'a str),
}

impl<'a> Piece<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Piece::Text(s) | Piece::Marker(s) => s,
        }
    }
}

/// Splits `text` around citation markers, keeping the markers as their own
/// pieces. Text pieces may be empty (before a leading marker, between two
/// adjacent markers, after a trailing one).
pub fn split_markers(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for marker in CITATION_MARKER.find_iter(text) {
        pieces.push(Piece::Text(&text[last..marker.start()]));
        pieces.push(Piece::Marker(marker.as_str()));
        last = marker.end();
    }
    pieces.push(Piece::Text(&text[last..]));

    pieces
}

fn parse_marker(marker: &str) -> Option<CitationIndex> {
    marker
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|digits| digits.parse::<u32>().ok())
        .and_then(CitationIndex::new)
}

/// Resolves every marker in `text` against `citations`.
///
/// Adjacent literal text is merged, so a fragment without resolvable markers
/// comes back as exactly one literal equal to the input (including `""`).
pub fn resolve(text: &str, citations: &CitationMap) -> TokenSequence {
    let mut tokens = Vec::new();
    let mut pending = String::new();

    for piece in split_markers(text) {
        let Piece::Marker(marker) = piece else {
            pending.push_str(piece.as_str());
            continue;
        };

        let resolved = parse_marker(marker)
            .and_then(|index| citations.get(index).map(|record| (index, record)));

        match resolved {
            Some((index, record)) => {
                if !pending.is_empty() {
                    tokens.push(Token::literal(std::mem::take(&mut pending)));
                }
                tokens.push(Token::Citation {
                    index,
                    record: record.clone(),
                });
            }
            None => {
                let degradation = Degradation::MalformedCitationMarker {
                    marker: marker.to_string(),
                };
                debug!("{degradation}");
                pending.push_str(marker);
            }
        }
    }

    if !pending.is_empty() || tokens.is_empty() {
        tokens.push(Token::literal(pending));
    }

    tokens
}

/// Distinct citation indices referenced by `tokens`, in first-appearance order.
pub fn cited_indices(tokens: &[Token]) -> Vec<CitationIndex> {
    let mut seen = Vec::new();
    for token in tokens {
        if let Token::Citation { index, .. } = token {
            if !seen.contains(index) {
                seen.push(*index);
            }
        }
    }
    seen
}
