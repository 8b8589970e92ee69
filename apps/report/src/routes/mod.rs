pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::narrative::handlers as narrative;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Narrative API
        .route(
            "/api/v1/narrative/breakdown",
            post(narrative::handle_breakdown),
        )
        .route("/api/v1/narrative/resolve", post(narrative::handle_resolve))
        // Report API
        .route("/api/v1/reports", post(report::handle_build_report))
        .with_state(state)
}
