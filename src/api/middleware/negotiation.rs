//! Content negotiation guard.
//!
//! Every endpoint produces JSON, so a request whose `Accept` header rules out
//! JSON is answered with 406 before it reaches a handler.

use axum::{
    extract::Request,
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::error::{ApiError, VND_ERROR_JSON};

/// Media ranges that admit a JSON response.
const ACCEPTABLE: [&str; 4] = ["*/*", "application/*", "application/json", VND_ERROR_JSON];

/// Rejects requests that cannot be served a JSON representation.
///
/// A missing `Accept` header accepts anything. Media ranges with `q=0` are
/// treated as refused.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/status", get(status_handler))
///     .layer(middleware::from_fn(negotiation::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Result<Response, ApiError> {
    check_accept(req.headers())?;
    Ok(next.run(req).await)
}

fn check_accept(headers: &HeaderMap) -> Result<(), ApiError> {
    let mut values = headers.get_all(header::ACCEPT).iter().peekable();
    if values.peek().is_none() {
        return Ok(());
    }

    let mut offered = Vec::new();
    for value in values {
        let value = value
            .to_str()
            .map_err(|_| ApiError::NotAcceptable("Could not parse 'Accept' header".to_string()))?;

        if value.trim().is_empty() {
            return Ok(());
        }

        for range in value.split(',') {
            if accepts_json(range) {
                return Ok(());
            }
            offered.push(range.trim().to_string());
        }
    }

    Err(ApiError::NotAcceptable(format!(
        "Could not find acceptable representation for [{}]",
        offered.join(", ")
    )))
}

/// Whether a single media range such as `application/json;q=0.5` admits JSON.
fn accepts_json(range: &str) -> bool {
    let mut parts = range.split(';');
    let media = parts.next().unwrap_or_default().trim().to_ascii_lowercase();

    let refused = parts.any(|param| {
        let mut kv = param.splitn(2, '=');
        let key = kv.next().unwrap_or_default().trim();
        let value = kv.next().unwrap_or_default().trim();
        key.eq_ignore_ascii_case("q") && value.parse::<f32>().is_ok_and(|q| q <= 0.0)
    });

    !refused && ACCEPTABLE.contains(&media.as_str())
}
