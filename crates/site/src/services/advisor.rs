//! Packaging advice proxy.
//!
//! Drives an [`AdvisorChat`] through one request to the text model. The chat
//! lock is released while the model is working, so pages rendered meanwhile
//! show the loading state and further submissions are refused as busy.

use tokio::sync::Mutex;
use tracing::instrument;

use turanpet_core::advisor::{AdvisorChat, SYSTEM_PERSONA};
use turanpet_core::{Language, SubmitError};

use crate::gemini::GenerativeModel;

/// Submit `query` to the chat and record the model's answer.
///
/// Service failures are not errors for the caller: they end up in the
/// transcript as the fixed, flagged error entry and are logged here.
///
/// # Errors
///
/// Returns the [`SubmitError`] if the chat refused the query; the model is
/// not contacted in that case.
#[instrument(skip(model, chat, query), fields(query_len = query.len()))]
pub async fn request_advice<M: GenerativeModel>(
    model: &M,
    chat: &Mutex<AdvisorChat>,
    query: &str,
    language: Language,
) -> Result<(), SubmitError> {
    let pending = chat.lock().await.submit(query, language)?;

    let result = model.generate_text(pending.prompt(), SYSTEM_PERSONA).await;

    let mut chat = chat.lock().await;
    let applied = match result {
        Ok(reply) => chat.complete(&pending, reply.as_deref()),
        Err(e) => {
            tracing::error!(error = %e, "Packaging advice request failed");
            chat.fail(&pending)
        }
    };

    if !applied {
        tracing::debug!("Chat was dismissed before the reply arrived, reply discarded");
    }

    Ok(())
}
