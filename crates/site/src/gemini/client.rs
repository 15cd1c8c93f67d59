//! Generative Language API client.
//!
//! One `generateContent` call per request: no retries, no streaming, no caching.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

use super::GenerativeModel;
use super::error::{ApiErrorResponse, GeminiError};
use super::types::{GenerateContentRequest, GenerateContentResponse, InlineData};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Generative Language API client.
///
/// Cheap to clone; the HTTP connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key contains characters that are not valid
    /// in a header, or if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|e| GeminiError::InvalidApiKey(e.to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(GeminiClientInner {
                client,
                base_url: config.api_base_url.trim_end_matches('/').to_string(),
                text_model: config.text_model.clone(),
                image_model: config.image_model.clone(),
            }),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.inner.base_url)
    }

    /// Call `generateContent` on `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-2xx
    /// status, or the body cannot be parsed.
    #[instrument(skip(self, request))]
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(model))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))
    }
}

impl GenerativeModel for GeminiClient {
    #[instrument(skip_all, fields(model = %self.inner.text_model))]
    async fn generate_text(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<Option<String>, GeminiError> {
        let request = GenerateContentRequest::prompt(prompt, Some(system_instruction));
        let response = self
            .generate_content(&self.inner.text_model, &request)
            .await?;
        Ok(response.text())
    }

    #[instrument(skip_all, fields(model = %self.inner.image_model))]
    async fn generate_image(&self, prompt: &str) -> Result<InlineData, GeminiError> {
        let request = GenerateContentRequest::prompt(prompt, None);
        let response = self
            .generate_content(&self.inner.image_model, &request)
            .await?;
        response
            .first_inline_data()
            .cloned()
            .ok_or(GeminiError::NoImage)
    }
}

/// Map a non-2xx response onto a [`GeminiError`].
async fn handle_error_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> GeminiError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return GeminiError::RateLimited(retry_after);
    }

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return GeminiError::Unauthorized(format!("API key rejected ({status})"));
    }

    match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(api_error) => GeminiError::Api {
                code: api_error.error.code,
                status: api_error.error.status,
                message: api_error.error.message,
            },
            Err(_) => GeminiError::Api {
                code: status.as_u16(),
                status: "UNKNOWN".to_string(),
                message: body.chars().take(200).collect(),
            },
        },
        Err(e) => GeminiError::Http(e),
    }
}
