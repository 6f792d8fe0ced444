//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Tracing layer type returned by [`layer`].
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates a tracing middleware for HTTP requests.
///
/// - One `INFO` span per request with method, URI and version
/// - One `INFO` line per response with status and latency in milliseconds
/// - `500` responses (unknown keys) are additionally reported as failures at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/github version=HTTP/1.1}: finished processing request latency=0 ms status=302
/// ERROR request{method=GET uri=/nope version=HTTP/1.1}: HTTP 500 - Key not in DB key=nope
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
