use serde::{Deserialize, Serialize};

use crate::models::citation::CitationMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Mixed,
}

/// One source quote as delivered by the audit backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(default)]
    pub id: Option<String>,
    pub text_snippet: String,
    pub source_name: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub original_post_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub confidence_score: Option<Confidence>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    #[serde(default)]
    pub source_count: Option<u32>,
    #[serde(default)]
    pub date_range: Option<String>,
    #[serde(default)]
    pub median_date: Option<String>,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub recent_sources_count: Option<u32>,
    #[serde(default)]
    pub total_months_span: Option<u32>,
}

/// The audit payload for one employer. Fetched elsewhere; this service only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditPayload {
    pub company_name: String,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub citation_map: Option<CitationMap>,
    #[serde(default)]
    pub content_items: Option<Vec<ContentItem>>,
    #[serde(default)]
    pub data_quality: Option<DataQuality>,
    #[serde(default)]
    pub suggested_questions: Option<Vec<String>>,
    /// Upstream spells this `sparsData`.
    #[serde(default, rename = "sparsData", alias = "sparseData")]
    pub sparse_data: Option<bool>,
    #[serde(default)]
    pub source_count: Option<u32>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub limited_summary: Option<String>,
}
