//! Types for the Generative Language `generateContent` endpoint.
//!
//! Field names follow the API's camelCase JSON.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::error::GeminiError;

/// Mime type assumed when an inline payload does not declare one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// A turn of content: a role and its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"; omitted for system instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// A role-less single-part content, used for `systemInstruction`.
    #[must_use]
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// One part of a turn. The API sends exactly one of the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Base64-encoded binary payload, e.g. a generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

impl InlineData {
    /// Render the payload as a `data:` URI an `<img>` element can display.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::InvalidImage`] if the payload is empty or not
    /// valid base64.
    pub fn to_data_uri(&self) -> Result<String, GeminiError> {
        let data = self.data.trim();
        if data.is_empty() {
            return Err(GeminiError::InvalidImage("empty payload".to_string()));
        }
        STANDARD
            .decode(data)
            .map_err(|e| GeminiError::InvalidImage(e.to_string()))?;

        let mime = if self.mime_type.is_empty() {
            DEFAULT_IMAGE_MIME
        } else {
            self.mime_type.as_str()
        };
        Ok(format!("data:{mime};base64,{data}"))
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

impl GenerateContentRequest {
    /// A single user prompt, optionally steered by a system instruction.
    #[must_use]
    pub fn prompt(prompt: &str, system_instruction: Option<&str>) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            system_instruction: system_instruction.map(Content::instruction),
        }
    }
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A generated candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate, `None` if it has no text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }

    /// First inline payload among the first candidate's parts.
    #[must_use]
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.first_parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}
