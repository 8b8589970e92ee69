use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Conditions the narrative subsystem absorbs instead of failing.
///
/// These are logged, never returned as `Err`: a report must stay renderable
/// whatever the narrative, the citation map, or the page looks like.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Degradation {
    #[error("citation marker {marker} has no matching record; kept as literal text")]
    MalformedCitationMarker { marker: String },

    #[error("narrative is empty; rendering raw-text fallback")]
    EmptyOrMissingNarrative,

    #[error("quote anchor {anchor_id} is not on the page; ignoring click")]
    MissingAnchorElement { anchor_id: String },
}
