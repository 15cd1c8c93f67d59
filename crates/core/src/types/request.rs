//! Outcome of submitting input to one of the AI widgets.

use thiserror::Error;

/// Why a submission was declined without contacting the external service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("input is empty")]
    Empty,
    #[error("a request is already in flight")]
    Busy,
    #[error("widget has been dismissed")]
    Closed,
}
