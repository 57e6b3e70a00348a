//! Handler for the status endpoint.

use axum::{Json, extract::State};

use crate::api::dto::StatusResponse;
use crate::state::AppState;

/// Reports the service version and whether it is ready for traffic.
///
/// # Endpoint
///
/// `GET /status`
///
/// # Response
///
/// Always **200 OK**; readiness is reported in the body rather than the
/// status code.
///
/// ```json
/// {
///   "version": "0.1.0",
///   "ready": true
/// }
/// ```
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(state.status().into())
}
