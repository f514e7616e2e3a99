//! Request ID middleware.
//!
//! Every request gets an id, either the one supplied by the caller in
//! `X-Request-ID` or a fresh UUID v4. The id is attached to the request span,
//! logged on completion and echoed back in the response.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reads the caller-supplied request id, ignoring empty or non-ASCII values.
fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub async fn trace_id(req: Request<Body>, next: Next) -> Response {
    let request_id =
        incoming_request_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let start = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_request_id_present() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-123_abc.xyz"));
        assert_eq!(incoming_request_id(&headers).as_deref(), Some("req-123_abc.xyz"));
    }

    #[test]
    fn test_incoming_request_id_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert!(incoming_request_id(&headers).is_none());

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));
        assert!(incoming_request_id(&headers).is_none());
    }

    fn app() -> axum::Router {
        axum::Router::new()
            .route("/", axum::routing::get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(trace_id))
    }

    #[tokio::test]
    async fn test_trace_id_keeps_caller_id() {
        use tower::ServiceExt;

        let request = Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, "caller-42")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "caller-42");
    }

    #[tokio::test]
    async fn test_trace_id_generates_uuid_when_missing() {
        use tower::ServiceExt;

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        let id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }
}
