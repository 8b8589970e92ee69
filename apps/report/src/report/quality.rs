//! Data-quality summary shown above the report.

use serde::Serialize;

use crate::models::audit::{Confidence, DataQuality};

const SCOPE_PER_SOURCE: u32 = 15;
const MIN_RESEARCH_SCOPE: u32 = 100;
const MAX_RESEARCH_SCOPE: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualitySummary {
    pub source_count: u32,
    /// Estimated number of discussions analyzed.
    pub research_scope: u32,
    pub date_range: String,
    pub median_date: String,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_months_span: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_sources_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_share_percent: Option<u32>,
    pub freshness_message: String,
    pub coverage_note: String,
}

pub fn research_scope(source_count: u32) -> u32 {
    source_count
        .saturating_mul(SCOPE_PER_SOURCE)
        .clamp(MIN_RESEARCH_SCOPE, MAX_RESEARCH_SCOPE)
}

fn recent_share_percent(recent: u32, source_count: u32) -> Option<u32> {
    if recent == 0 || source_count == 0 {
        return None;
    }
    Some((recent as f64 / source_count as f64 * 100.0).round() as u32)
}

fn freshness_message(source_count: u32, confidence: Confidence) -> String {
    let scope = research_scope(source_count);
    if source_count >= 5 && confidence == Confidence::High {
        format!("Comprehensive research: {source_count} authentic insights from {scope}+ employee discussions")
    } else if source_count >= 3 {
        format!("Quality research: {source_count} verified insights from {scope}+ employee posts")
    } else if source_count >= 1 {
        format!("Initial findings: {source_count} authentic insights from {scope}+ discussions analyzed")
    } else {
        "Research in progress: No verified authentic content found yet".to_string()
    }
}

fn coverage_note(source_count: u32, confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High if source_count >= 3 => "Comprehensive authentic content from verified sources",
        Confidence::Medium if source_count >= 2 => "Good authentic coverage from multiple sources",
        _ => "Limited authentic data - consider additional research",
    }
}

/// Summarizes payload data quality, filling the upstream defaults for absent fields.
pub fn summarize(quality: Option<&DataQuality>) -> QualitySummary {
    let quality = quality.cloned().unwrap_or_default();
    let source_count = quality.source_count.unwrap_or(0);
    let confidence = quality.confidence.unwrap_or_default();
    let recent = quality.recent_sources_count.filter(|&n| n > 0);

    QualitySummary {
        source_count,
        research_scope: research_scope(source_count),
        date_range: quality.date_range.unwrap_or_else(|| "2024".to_string()),
        median_date: quality.median_date.unwrap_or_else(|| "Recent".to_string()),
        confidence,
        total_months_span: quality.total_months_span,
        recent_sources_count: recent,
        recent_share_percent: recent.and_then(|n| recent_share_percent(n, source_count)),
        freshness_message: freshness_message(source_count, confidence),
        coverage_note: coverage_note(source_count, confidence).to_string(),
    }
}
