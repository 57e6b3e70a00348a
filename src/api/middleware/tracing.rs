//! Request tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, DefaultOnResponse,
    TraceLayer,
};
use tracing::Level;

/// Trace layer with failure reporting switched off.
pub type RequestTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    (),
>;

/// Opens an `INFO` span per request and logs every response with its status
/// and latency in milliseconds.
///
/// 5xx responses are not reported again as failures: the only `ERROR` record
/// for a request is the one [`crate::error::ApiError`] emits for an
/// unanticipated failure. A [`crate::error::ServiceError`] carrying a 5xx
/// status is an expected outcome and shows up in the regular response line.
///
/// ```text
/// INFO request{method=GET uri=/status version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// ```
pub fn layer() -> RequestTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(())
}
