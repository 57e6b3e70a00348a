//! Request extractors whose rejections go through [`ApiError`].
//!
//! axum's own `Json` and `Query` reject with plain-text bodies. Handlers that
//! use these wrappers instead get the JSON error shape for free:
//!
//! ```rust,ignore
//! async fn create(ApiJson(payload): ApiJson<CreateRequest>) -> Result<Json<Created>, ApiError> {
//!     // `payload` is deserialized and validated here
//! }
//! ```

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that is deserialized and then validated.
///
/// - wrong or missing `Content-Type` → 415
/// - unparsable body → 400 `MessageNotReadable`
/// - validation failure → 400 `ArgumentNotValid`
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string parameters.
///
/// A missing required field becomes 400 `MissingRequestParameter`; any other
/// deserialization failure becomes 400 `ArgumentNotValid`.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
