//! Reshapes the router's bare `405 Method Not Allowed`.
//!
//! axum answers an unsupported method with an empty 405 and an `Allow`
//! header. This middleware replaces the empty body with the JSON error,
//! keeping `Allow`.

use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Converts body-less 405 responses into [`ApiError::MethodNotAllowed`].
///
/// Responses that already carry a `Content-Type` (for example a handler
/// returning a service error with status 405) pass through untouched.
pub async fn layer(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let response = next.run(req).await;

    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    tracing::debug!(%method, "Unsupported request method");

    let mut reshaped =
        ApiError::MethodNotAllowed(format!("Request method '{method}' is not supported"))
            .into_response();
    if let Some(allow) = allow {
        reshaped.headers_mut().insert(header::ALLOW, allow);
    }
    reshaped
}
