//! # Service Status
//!
//! Version/readiness reporting and a uniform JSON error responder for REST
//! services built on Axum.
//!
//! ## Components
//!
//! - **Status** ([`domain::StatusInfo`]) - version and readiness record served
//!   by `GET /status`
//! - **Error responder** ([`error::ApiError`]) - fixed mapping from failure
//!   category to HTTP status and `{message, kind}` JSON body
//! - **Adapters** ([`api::extract`], [`api::middleware`]) - route axum's own
//!   rejections (bad JSON, bad query, wrong method, wrong `Accept`, panics)
//!   through the same mapping
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export SERVICE_VERSION="1.2.3"   # Optional, defaults to the crate version
//!
//! cargo run
//! curl http://localhost:8080/status
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::api::extract::{ApiJson, ApiQuery};
    pub use crate::domain::StatusInfo;
    pub use crate::error::{ApiError, ErrorBody, ServiceError};
    pub use crate::state::AppState;
}
