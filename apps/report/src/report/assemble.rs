//! Report assembly — turns one audit payload into the view model the
//! renderer draws. Sparse payloads get the honest-fallback variant instead of
//! a full report.

use serde::Serialize;
use tracing::info;

use crate::models::audit::{AuditPayload, Sentiment};
use crate::models::citation::{CitationIndex, CitationMap};
use crate::narrative::breakdown::{analyze, StructuredBreakdown};
use crate::report::quality::{summarize, QualitySummary};
use crate::report::quotes::{build_quote_cards, QuoteCard};

/// Shown while the backend has not produced a summary yet.
pub const PENDING_SUMMARY: &str = "Analyzing employer data...";

/// Asked when the payload carries no questions of its own.
pub const DEFAULT_INTERVIEW_QUESTIONS: &[&str] = &[
    "What does a typical day look like in this role?",
    "How would you describe the company culture and team dynamics?",
    "What are the biggest challenges facing the team or company currently?",
    "How does the company support professional development and career growth?",
    "What does work-life balance look like for employees in similar roles?",
    "How are performance reviews conducted and what does success look like?",
    "What's the management style and how often do you interact with leadership?",
    "Are there any upcoming changes or initiatives I should know about?",
];

#[derive(Debug, Clone, Serialize)]
pub struct FullReport {
    pub company_name: String,
    pub title: String,
    pub quality: QualitySummary,
    pub analysis: StructuredBreakdown,
    pub quotes: Vec<QuoteCard>,
    pub suggested_questions: Vec<String>,
    /// Number of citation records behind the analysis.
    pub verified_source_count: usize,
    /// Citation indices the analysis actually links, in reading order.
    pub cited_indices: Vec<CitationIndex>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentBadge {
    pub sentiment: Sentiment,
    pub marker: &'static str,
}

impl From<Sentiment> for SentimentBadge {
    fn from(sentiment: Sentiment) -> Self {
        let marker = match sentiment {
            Sentiment::Positive => "✓",
            Sentiment::Negative => "⚠",
            Sentiment::Mixed => "~",
        };
        SentimentBadge { sentiment, marker }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SparseReport {
    pub company_name: String,
    pub source_count: u32,
    pub source_count_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limited_summary: Option<String>,
    pub suggested_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Full(FullReport),
    Sparse(SparseReport),
}

fn source_count_label(count: u32) -> String {
    if count == 1 {
        "1 source".to_string()
    } else {
        format!("{count} sources")
    }
}

fn questions_or_default(questions: Option<&Vec<String>>) -> Vec<String> {
    match questions {
        Some(qs) if !qs.is_empty() => qs.clone(),
        _ => DEFAULT_INTERVIEW_QUESTIONS
            .iter()
            .map(|q| q.to_string())
            .collect(),
    }
}

pub fn assemble(payload: &AuditPayload) -> Report {
    if payload.sparse_data == Some(true) {
        info!(company = %payload.company_name, "Sparse audit payload, building fallback report");
        return Report::Sparse(SparseReport {
            company_name: payload.company_name.clone(),
            source_count: payload.source_count.unwrap_or(0),
            source_count_label: source_count_label(payload.source_count.unwrap_or(0)),
            sentiment: payload.sentiment.map(SentimentBadge::from),
            limited_summary: payload
                .limited_summary
                .clone()
                .filter(|s| !s.trim().is_empty()),
            suggested_questions: questions_or_default(payload.suggested_questions.as_ref()),
        });
    }

    let empty = CitationMap::new();
    let citations = payload.citation_map.as_ref().unwrap_or(&empty);
    let summary = payload.ai_summary.as_deref().unwrap_or(PENDING_SUMMARY);

    let analysis = analyze(summary, citations);
    let cited_indices = analysis.cited_indices();
    let quotes = build_quote_cards(payload.content_items.as_deref().unwrap_or_default());

    info!(
        company = %payload.company_name,
        quotes = quotes.len(),
        citations = citations.len(),
        linked = cited_indices.len(),
        "Full report assembled"
    );

    Report::Full(FullReport {
        company_name: payload.company_name.clone(),
        title: format!(
            "{} Employee Reviews: What It's Really Like to Work Here",
            payload.company_name
        ),
        quality: summarize(payload.data_quality.as_ref()),
        analysis,
        quotes,
        suggested_questions: payload.suggested_questions.clone().unwrap_or_default(),
        verified_source_count: citations.len(),
        cited_indices,
    })
}
