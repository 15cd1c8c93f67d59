//! Chat transcript entries.

use serde::{Deserialize, Serialize};

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the advice transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Set on the fixed message that replaces a failed reply.
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
        }
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            is_error: false,
        }
    }

    #[must_use]
    pub fn assistant_error(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            is_error: true,
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}
