//! Structured breakdown of a narrative: headline, strengths, concerns.
//!
//! Everything is re-derived from scratch on each call. The headline is the
//! first sentence; themes come from the rest of the text.

use serde::Serialize;
use tracing::debug;

use crate::errors::Degradation;
use crate::models::citation::{CitationIndex, CitationMap};
use crate::narrative::citations::{cited_indices, resolve, TokenSequence};
use crate::narrative::classifier::extract_themes;
use crate::narrative::segmenter::segment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredBreakdown {
    pub headline: TokenSequence,
    pub supportive_points: Vec<TokenSequence>,
    pub cautionary_points: Vec<TokenSequence>,
    /// Whole narrative, resolved as one block. Present only when neither theme
    /// list has entries, so the renderer still has something to show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<TokenSequence>,
}

impl StructuredBreakdown {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Distinct citation indices linked from any section, in reading order.
    pub fn cited_indices(&self) -> Vec<CitationIndex> {
        let sections = std::iter::once(&self.headline)
            .chain(&self.supportive_points)
            .chain(&self.cautionary_points)
            .chain(self.fallback.as_ref());

        let mut seen: Vec<CitationIndex> = Vec::new();
        for section in sections {
            for index in cited_indices(section) {
                if !seen.contains(&index) {
                    seen.push(index);
                }
            }
        }
        seen
    }
}

/// Builds the breakdown for `narrative`, resolving citations in every section
/// independently.
pub fn analyze(narrative: &str, citations: &CitationMap) -> StructuredBreakdown {
    let sentences = segment(narrative);
    let headline_text = sentences.first().map(|s| s.trim()).unwrap_or_default();
    let remaining = sentences.get(1..).unwrap_or_default().join(" ");

    let themes = extract_themes(&remaining);

    let headline = if headline_text.is_empty() {
        Vec::new()
    } else {
        resolve(headline_text, citations)
    };

    let supportive_points = themes
        .supportive
        .iter()
        .map(|point| resolve(point, citations))
        .collect();
    let cautionary_points = themes
        .cautionary
        .iter()
        .map(|point| resolve(point, citations))
        .collect();

    let fallback = if themes.is_empty() {
        if narrative.trim().is_empty() {
            debug!("{}", Degradation::EmptyOrMissingNarrative);
        }
        Some(resolve(narrative, citations))
    } else {
        None
    };

    StructuredBreakdown {
        headline,
        supportive_points,
        cautionary_points,
        fallback,
    }
}
