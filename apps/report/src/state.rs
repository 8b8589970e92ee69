use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only: every request re-derives its report from the request body.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
