//! Axum route handlers for the Report API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::audit::AuditPayload;
use crate::narrative::handlers::ensure_within_limit;
use crate::report::assemble::{assemble, Report};
use crate::state::AppState;

/// POST /api/v1/reports
///
/// Builds the render-ready report for an audit payload the caller already
/// fetched. Nothing is stored.
pub async fn handle_build_report(
    State(state): State<AppState>,
    Json(payload): Json<AuditPayload>,
) -> Result<Json<Report>, AppError> {
    if payload.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "companyName cannot be empty".to_string(),
        ));
    }

    let limit = state.config.max_narrative_bytes;
    if let Some(summary) = payload.ai_summary.as_deref() {
        ensure_within_limit("aiSummary", summary, limit)?;
    }
    if let Some(summary) = payload.limited_summary.as_deref() {
        ensure_within_limit("limitedSummary", summary, limit)?;
    }

    Ok(Json(assemble(&payload)))
}
