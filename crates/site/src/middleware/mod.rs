//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame and referrer policy)
//! 5. Session layer (tower-sessions with in-memory store)
//! 6. Rate limiting on the model-backed routes (governor)
//!
//! [`PageContext`] is not a layer: it is an extractor every page handler
//! takes, built from the session the session layer attached.

pub mod page_context;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use page_context::{PageContext, safe_return_to};
pub use rate_limit::ai_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
