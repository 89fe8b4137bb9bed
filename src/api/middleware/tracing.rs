//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with method, URI and version. Responses
/// are logged with status and latency in milliseconds; 5xx responses are
/// additionally logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/2025/3/14/hello-world version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// ERROR request{method=POST uri=/api/posts/7/share version=HTTP/1.1}: response failed classification=Status code: 502 Bad Gateway latency=10012 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
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
