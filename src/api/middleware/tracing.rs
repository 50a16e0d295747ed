//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeSpanFn = fn(&Request<axum::body::Body>) -> Span;

/// Creates a tracing middleware for HTTP requests.
///
/// One `INFO` span per request with method and path. The query string is
/// left out (it carries target URLs) and delete secrets are masked, so
/// nothing that grants ownership ends up in the logs:
///
/// ```text
/// INFO request{method=GET path=/delete/***}: finished processing request latency=3 ms status=303
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeSpanFn)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}

fn request_span(request: &Request<axum::body::Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %redact_path(request.uri().path()),
    )
}

/// Masks the secret in `/delete/{secret}` paths.
pub(crate) fn redact_path(path: &str) -> &str {
    if path.starts_with("/delete/") {
        "/delete/***"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_delete_secret() {
        assert_eq!(
            redact_path("/delete/4f2c0d6e9a8b47c1b3e5f7a9c1d3e5f7"),
            "/delete/***"
        );
    }

    #[test]
    fn test_other_paths_unchanged() {
        assert_eq!(redact_path("/k3x9q"), "/k3x9q");
        assert_eq!(redact_path("/api/shorten"), "/api/shorten");
    }
}
