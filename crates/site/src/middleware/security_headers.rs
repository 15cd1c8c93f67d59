//! Response hardening headers.
//!
//! No inline script or style is allowed. The only outside origins are the
//! product photography host and the contact page's map widget; generated
//! visualizer images arrive as `data:` URIs.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Content Security Policy applied to every response.
pub const CONTENT_SECURITY_POLICY_VALUE: &str = concat!(
    "default-src 'none'; ",
    "script-src 'self'; ",
    "style-src 'self'; ",
    "font-src 'self'; ",
    "img-src 'self' https://images.unsplash.com data:; ",
    "frame-src https://yandex.ru; ",
    "base-uri 'self'; ",
    "form-action 'self'; ",
    "frame-ancestors 'none'",
);

/// Headers set on every response, overriding anything a handler set.
const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("content-security-policy", CONTENT_SECURITY_POLICY_VALUE),
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    // The map widget needs the origin to render
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "permissions-policy",
        "camera=(), geolocation=(), microphone=(), payment=(), usb=()",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("x-dns-prefetch-control", "off"),
];

/// Add [`SECURITY_HEADERS`] to the response.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for &(name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    response
}
