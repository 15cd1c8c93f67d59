//! Correlation ids for log lines, Sentry events and bug reports.
//!
//! An id set by the reverse proxy is kept so one request can be followed
//! through both tiers; anything unusable is replaced with a fresh UUID v4.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Tag the request span and Sentry scope with the request id and echo it back.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request_id_for(request.headers());

    Span::current().record("request_id", request_id.to_str().unwrap_or_default());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", request_id.to_str().unwrap_or_default());
    });

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}

/// The upstream id when it is short printable ASCII, otherwise a new UUID.
fn request_id_for(headers: &HeaderMap) -> HeaderValue {
    headers
        .get(REQUEST_ID_HEADER)
        .filter(|value| is_usable(value.as_bytes()))
        .cloned()
        .unwrap_or_else(fresh_id)
}

fn is_usable(id: &[u8]) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.iter().all(u8::is_ascii_graphic)
}

fn fresh_id() -> HeaderValue {
    // A hyphenated UUID is always a valid header value
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}
