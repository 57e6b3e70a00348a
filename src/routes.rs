//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /status` - Service version and readiness
//!
//! # Middleware (outermost first)
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Panic catcher** - Panics become the catch-all 500
//! - **Method guard** - Router 405s get the JSON error body
//! - **Content negotiation** - 406 when JSON is not acceptable

use crate::api;
use crate::api::middleware::{method, negotiation, panic, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = with_error_layers(api::routes::routes().with_state(state));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Wraps a router so that every failure it produces uses the JSON error shape.
///
/// Exposed separately so an embedding service can apply the same layers to
/// its own routes.
pub fn with_error_layers(router: Router) -> Router {
    router
        .layer(middleware::from_fn(negotiation::layer))
        .layer(middleware::from_fn(method::layer))
        .layer(panic::layer())
        .layer(tracing::layer())
}
