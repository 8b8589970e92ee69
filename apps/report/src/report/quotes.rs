//! Quote cards — the source excerpts citation clicks scroll to.
//!
//! Each card carries the anchor id it is rendered under; the id space is the
//! one `crossref::anchors::anchor_id` maps citation indices into.

use serde::Serialize;

use crate::crossref::anchors::quote_anchor_id;
use crate::models::audit::{Confidence, ContentItem};
use crate::models::dates::display_date;

const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourcePlatform {
    Reddit,
    Glassdoor,
    Blind,
    Indeed,
    LinkedIn,
    Other,
}

/// Ordered: first containment match wins.
const PLATFORM_RULES: &[(&str, SourcePlatform)] = &[
    ("reddit", SourcePlatform::Reddit),
    ("glassdoor", SourcePlatform::Glassdoor),
    ("blind", SourcePlatform::Blind),
    ("indeed", SourcePlatform::Indeed),
    ("linkedin", SourcePlatform::LinkedIn),
];

pub fn classify_platform(source_name: &str) -> SourcePlatform {
    let lower = source_name.to_lowercase();
    PLATFORM_RULES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map_or(SourcePlatform::Other, |(_, platform)| *platform)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Compensation,
    Culture,
    RedFlag,
    Praise,
    Management,
    WorkLife,
    General,
}

/// Ordered: the first rule with any matching needle wins.
const TAG_RULES: &[(&[&str], TagCategory)] = &[
    (&["compensation", "salary", "pay"], TagCategory::Compensation),
    (&["culture", "environment"], TagCategory::Culture),
    (&["red-flag", "warning", "toxic"], TagCategory::RedFlag),
    (&["praise", "positive", "recommend"], TagCategory::Praise),
    (&["management", "leadership"], TagCategory::Management),
    (&["work-life", "balance"], TagCategory::WorkLife),
];

pub fn classify_tag(tag: &str) -> TagCategory {
    let lower = tag.to_lowercase();
    TAG_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map_or(TagCategory::General, |(_, category)| *category)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteTag {
    pub label: String,
    pub category: TagCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteCard {
    pub anchor_id: String,
    pub excerpt: String,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub platform: SourcePlatform,
    /// `None` for anonymous posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    pub tags: Vec<QuoteTag>,
    pub confidence: Confidence,
}

impl QuoteCard {
    pub fn from_item(position: usize, item: &ContentItem) -> Self {
        let author = item
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty() && *a != ANONYMOUS_AUTHOR)
            .map(str::to_string);

        QuoteCard {
            anchor_id: quote_anchor_id(position),
            excerpt: item.text_snippet.clone(),
            source_name: item.source_name.clone(),
            source_url: item.source_url.clone(),
            platform: classify_platform(&item.source_name),
            author,
            posted_on: item.original_post_date.clone(),
            display_date: item.original_post_date.as_deref().map(display_date),
            tags: item
                .tags
                .iter()
                .map(|tag| QuoteTag {
                    label: tag.clone(),
                    category: classify_tag(tag),
                })
                .collect(),
            confidence: item.confidence_score.unwrap_or_default(),
        }
    }
}

/// Builds cards in feed order; card `n` is rendered under `quote-{n}`.
pub fn build_quote_cards(items: &[ContentItem]) -> Vec<QuoteCard> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| QuoteCard::from_item(position, item))
        .collect()
}
