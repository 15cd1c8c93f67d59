//! Request errors and Sentry reporting.
//!
//! Route handlers return `Result<T, AppError>`. Failures of the advisor and
//! visualizer never reach this type: they are recorded in the widget state and
//! rendered as the widget's fixed error message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use turanpet_core::Language;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing the visitor session failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The form carried a value the site does not accept.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A model task died before recording its outcome.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status returned to the visitor.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");
            return (status, "Internal server error").into_response();
        }

        tracing::debug!(error = %self, "Request rejected");
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Leave a Sentry breadcrumb for a visitor action, tagged with their language.
pub fn add_breadcrumb(category: &str, message: &str, language: Language) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data: [("lang".to_string(), serde_json::Value::from(language.code()))]
            .into_iter()
            .collect(),
        ..Default::default()
    });
}
