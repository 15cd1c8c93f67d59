//! Generative Language (Gemini) API integration.
//!
//! # Endpoints
//!
//! ```text
//! POST {base}/models/{model}:generateContent   header x-goog-api-key
//! ```
//!
//! Two models are used: a text model for packaging advice and an image model
//! for the logistics visualizer. The services talk to them through
//! [`GenerativeModel`] so they can be exercised without a network.

mod client;
mod error;
mod types;

use std::future::Future;

pub use client::GeminiClient;
pub use error::{ApiError, ApiErrorResponse, GeminiError};
pub use types::{
    Candidate, Content, DEFAULT_IMAGE_MIME, GenerateContentRequest, GenerateContentResponse,
    InlineData, Part,
};

/// A hosted model able to answer prompts with text or an image.
pub trait GenerativeModel: Send + Sync {
    /// Generate a text answer for `prompt` under `system_instruction`.
    ///
    /// `Ok(None)` means the service answered but produced no text.
    fn generate_text(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> impl Future<Output = Result<Option<String>, GeminiError>> + Send;

    /// Generate an image for `prompt`, returning the first inline payload.
    fn generate_image(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<InlineData, GeminiError>> + Send;
}
