//! Citation records and the index → record map that narrative markers point into.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::dates::{display_date, parse_date};

/// 1-based citation index, as written inside a `[n]` marker.
pub type CitationIndex = NonZeroU32;

/// Source metadata a citation marker resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    #[serde(rename = "snippet", alias = "excerpt")]
    pub excerpt: String,
    #[serde(rename = "source", alias = "sourceName")]
    pub source_name: String,
    #[serde(
        rename = "url",
        alias = "sourceUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_url: Option<String>,
    /// Raw date string from the payload. Parsed lazily; see [`CitationRecord::published_on`].
    #[serde(
        rename = "date",
        alias = "publishedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub published_date: Option<String>,
}

impl CitationRecord {
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.published_date.as_deref().and_then(parse_date)
    }

    pub fn display_date(&self) -> Option<String> {
        self.published_date.as_deref().map(display_date)
    }
}

/// Citation map keyed by positive index.
///
/// Upstream sends a JSON object keyed by decimal strings. Keys that do not
/// parse as a positive `u32` cannot be referenced by any marker and are
/// dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, CitationRecord>",
    into = "BTreeMap<String, CitationRecord>"
)]
pub struct CitationMap(BTreeMap<CitationIndex, CitationRecord>);

impl CitationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: CitationIndex, record: CitationRecord) -> Option<CitationRecord> {
        self.0.insert(index, record)
    }

    pub fn get(&self, index: CitationIndex) -> Option<&CitationRecord> {
        self.0.get(&index)
    }

    pub fn contains(&self, index: CitationIndex) -> bool {
        self.0.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CitationIndex, &CitationRecord)> {
        self.0.iter().map(|(index, record)| (*index, record))
    }
}

impl From<BTreeMap<String, CitationRecord>> for CitationMap {
    fn from(raw: BTreeMap<String, CitationRecord>) -> Self {
        let mut map = CitationMap::new();
        for (key, record) in raw {
            match key.trim().parse::<u32>().ok().and_then(NonZeroU32::new) {
                Some(index) => {
                    map.insert(index, record);
                }
                None => warn!(key = %key, "Dropping citation with non-positive or non-numeric key"),
            }
        }
        map
    }
}

impl From<CitationMap> for BTreeMap<String, CitationRecord> {
    fn from(map: CitationMap) -> Self {
        map.0
            .into_iter()
            .map(|(index, record)| (index.to_string(), record))
            .collect()
    }
}

impl FromIterator<(CitationIndex, CitationRecord)> for CitationMap {
    fn from_iter<I: IntoIterator<Item = (CitationIndex, CitationRecord)>>(iter: I) -> Self {
        CitationMap(iter.into_iter().collect())
    }
}
