//! API route configuration.

use crate::api::handlers::status_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /status` - Service version and readiness
pub fn routes() -> Router<AppState> {
    Router::new().route("/status", get(status_handler))
}
