//! HTTP request/response tracing middleware.

use axum::extract::{MatchedPath, Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Trace layer with a route-aware span.
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request) -> Span>;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates an `INFO` span with the HTTP method, the matched route template
///   and the raw path. Redirect hits for different codes share one route
///   (`/{code}` or `/s/{id}`) while `uri` still carries the code.
///
/// **On Response:**
/// - Logs at `INFO` level with the status code and latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET route=/{code} uri=/summer-sale}: finished processing request latency=2 ms status=307
/// INFO request{method=GET route=/api/links/{code}/clicks uri=/api/links/summer-sale/clicks}: finished processing request latency=4 ms status=200
/// ```
///
/// Must be added with `Router::layer` so routing has already run when the
/// span is created; unmatched requests are labelled `unmatched`.
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(req: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        route = route_label(req),
        uri = %req.uri().path(),
    )
}

/// Route template the request matched, e.g. `/s/{id}`.
fn route_label(req: &Request) -> &str {
    req.extensions()
        .get::<MatchedPath>()
        .map_or("unmatched", MatchedPath::as_str)
}
