//! Uniform JSON error responses.
//!
//! Every failure that ends a request is represented as an [`ApiError`] and
//! mapped through one fixed table to an HTTP status and a `{message, kind}`
//! body:
//!
//! | Variant | Status | `kind` |
//! |---|---|---|
//! | [`ApiError::NotAcceptable`] | 406 | `MediaTypeNotAcceptable` |
//! | [`ApiError::UnsupportedMediaType`] | 415 | `MediaTypeNotSupported` |
//! | [`ApiError::MethodNotAllowed`] | 405 | `MethodNotSupported` |
//! | [`ApiError::UnreadableBody`] | 400 | `MessageNotReadable` |
//! | [`ApiError::InvalidArgument`] | 400 | `ArgumentNotValid` |
//! | [`ApiError::MissingParameter`] | 400 | `MissingRequestParameter` |
//! | [`ApiError::Service`] | carried by the error | carried by the error |
//! | [`ApiError::Unhandled`] | 500 | type name of the failure |
//!
//! The mapping itself ([`ApiError::status`], [`ApiError::kind`],
//! [`ApiError::body`]) is pure. Only the conversion into an axum response
//! logs, and only for [`ApiError::Unhandled`].
//!
//! `kind` is diagnostic metadata. Clients should branch on the status code.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::any::Any;
use validator::ValidationErrors;

/// Media type advertised for the error surface during content negotiation.
pub const VND_ERROR_JSON: &str = "application/vnd.error+json";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub kind: String,
    /// Extra fields supplied by a [`ServiceError`], flattened into the body.
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub details: Map<String, Value>,
}

/// Failure raised on purpose by application code, with its own status.
///
/// The status is taken verbatim, never reinterpreted.
///
/// ```
/// use axum::http::StatusCode;
/// use service_status::error::{ApiError, ServiceError};
///
/// let err: ApiError = ServiceError::new(StatusCode::CONFLICT, "duplicate entry")
///     .with_detail("code", "DUPLICATE")
///     .into();
///
/// assert_eq!(err.status(), StatusCode::CONFLICT);
/// assert_eq!(err.body().message, "duplicate entry");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    status: StatusCode,
    kind: String,
    message: String,
    details: Map<String, Value>,
}

impl ServiceError {
    pub const DEFAULT_KIND: &'static str = "ServiceError";

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            kind: Self::DEFAULT_KIND.to_string(),
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Overrides the reported `kind`.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Adds a structured field to the response body.
    ///
    /// `message` and `kind` are reserved and cannot be overwritten this way.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "message" && key != "kind" {
            self.details.insert(key, value.into());
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }
}

/// Every way a request can fail, one variant per row of the mapping table.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No representation the client accepts can be produced.
    #[error("{0}")]
    NotAcceptable(String),

    /// The request body has a content type the endpoint does not support.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// The endpoint does not support the request method.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// The request body could not be parsed into the expected structure.
    #[error("{0}")]
    UnreadableBody(String),

    /// Request parameters failed validation.
    #[error("{0}")]
    InvalidArgument(String),

    /// A required request parameter was not supplied.
    #[error("{0}")]
    MissingParameter(String),

    #[error(transparent)]
    Service(ServiceError),

    /// Anything else. `detail` holds the full debug rendering for the logs
    /// and is never sent to the client.
    #[error("{message}")]
    Unhandled {
        message: String,
        type_name: String,
        detail: String,
    },
}

impl ApiError {
    /// Wraps an unexpected error, recording its type name and full detail.
    pub fn unhandled<E>(err: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::Unhandled {
            message: err.to_string(),
            type_name: short_type_name::<E>().to_string(),
            detail: format!("{err:?}"),
        }
    }

    /// Wraps the payload of a caught panic.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else {
            "Unknown panic message".to_string()
        };

        Self::Unhandled {
            detail: format!("panic: {message}"),
            message,
            type_name: "Panic".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnreadableBody(_)
            | ApiError::InvalidArgument(_)
            | ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(e) => e.status,
            ApiError::Unhandled { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            ApiError::NotAcceptable(_) => "MediaTypeNotAcceptable",
            ApiError::UnsupportedMediaType(_) => "MediaTypeNotSupported",
            ApiError::MethodNotAllowed(_) => "MethodNotSupported",
            ApiError::UnreadableBody(_) => "MessageNotReadable",
            ApiError::InvalidArgument(_) => "ArgumentNotValid",
            ApiError::MissingParameter(_) => "MissingRequestParameter",
            ApiError::Service(e) => e.kind.as_str(),
            ApiError::Unhandled { type_name, .. } => type_name.as_str(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        let details = match self {
            ApiError::Service(e) => e.details.clone(),
            _ => Map::new(),
        };

        ErrorBody {
            message: self.to_string(),
            kind: self.kind().to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Unhandled {
            type_name, detail, ..
        } = &self
        {
            tracing::error!(kind = %type_name, detail = %detail, "Caught otherwise unhandled error");
        }

        let status = self.status();
        let mut response = (status, Json(self.body())).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Service(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(e) => {
                ApiError::UnsupportedMediaType(e.body_text())
            }
            JsonRejection::JsonDataError(e) => ApiError::UnreadableBody(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::UnreadableBody(e.body_text()),
            JsonRejection::BytesRejection(e) => ApiError::UnreadableBody(e.body_text()),
            other => ApiError::UnreadableBody(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        let message = rejection.body_text();
        if is_missing_field(&message) {
            ApiError::MissingParameter(message)
        } else {
            ApiError::InvalidArgument(message)
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidArgument(errors.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unhandled {
            message: err.to_string(),
            type_name: "Error".to_string(),
            detail: format!("{err:?}"),
        }
    }
}

/// Whether a query rejection reports an absent field rather than a bad value.
///
/// The rejection text is `Failed to deserialize query string: <serde error>`;
/// only the serde error itself is inspected, and only its leading words, so
/// a bad value that happens to contain "missing field" does not match.
fn is_missing_field(message: &str) -> bool {
    let detail = message
        .split_once(": ")
        .map_or(message, |(_, detail)| detail);
    detail.starts_with("missing field `")
}

/// Last path segment of a type name, without generic arguments.
///
/// `std::io::Error` becomes `Error`, `serde_json::Error` becomes `Error`,
/// `my_crate::Outer<Inner>` becomes `Outer`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
