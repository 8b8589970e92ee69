//! Axum route handlers for the Narrative API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::citation::CitationMap;
use crate::narrative::breakdown::{analyze, StructuredBreakdown};
use crate::narrative::citations::{resolve, TokenSequence};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub citation_map: CitationMap,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub breakdown: StructuredBreakdown,
    pub source_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub text: String,
    #[serde(default)]
    pub citation_map: CitationMap,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub tokens: TokenSequence,
}

/// Rejects text larger than the configured bound. Empty text is fine.
pub fn ensure_within_limit(field: &str, text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "{field} is {} bytes; the limit is {max_bytes}",
            text.len()
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/narrative/breakdown
///
/// Splits a narrative into headline, strengths and concerns, with citation
/// markers resolved in every section.
pub async fn handle_breakdown(
    State(state): State<AppState>,
    Json(request): Json<BreakdownRequest>,
) -> Result<Json<BreakdownResponse>, AppError> {
    ensure_within_limit("summary", &request.summary, state.config.max_narrative_bytes)?;

    let breakdown = analyze(&request.summary, &request.citation_map);
    debug!(
        supportive = breakdown.supportive_points.len(),
        cautionary = breakdown.cautionary_points.len(),
        fallback = breakdown.is_fallback(),
        "Narrative breakdown built"
    );

    Ok(Json(BreakdownResponse {
        breakdown,
        source_count: request.citation_map.len(),
    }))
}

/// POST /api/v1/narrative/resolve
///
/// Resolves citation markers in arbitrary text.
pub async fn handle_resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    ensure_within_limit("text", &request.text, state.config.max_narrative_bytes)?;

    Ok(Json(ResolveResponse {
        tokens: resolve(&request.text, &request.citation_map),
    }))
}
