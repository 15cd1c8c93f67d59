//! Packaging advisor route handlers.
//!
//! The chat is a widget of the shared layout: every page renders it when the
//! visitor has one open. Each action redirects back to the page it came from.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use turanpet_core::advisor::AdvisorChat;
use turanpet_core::Language;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::safe_return_to;
use crate::middleware::session::{self, keys};
use crate::services::{SharedWidget, request_advice};
use crate::state::AppState;

/// Form carrying only the page to return to.
#[derive(Debug, Deserialize)]
pub struct ReturnForm {
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Advisor question form data.
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Open the advisor, keeping an already open transcript.
///
/// POST /assistant/open
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
#[instrument(skip(state, session, form))]
pub async fn open(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect> {
    let language = session::language(&session).await;
    open_chat(&state, &session, language).await?;

    add_breadcrumb("assistant", "Advisor opened", language);
    Ok(back_to_widget(form.return_to.as_deref()))
}

/// Dismiss the advisor.
///
/// POST /assistant/close
///
/// A reply still in flight is discarded when it arrives.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
#[instrument(skip(state, session, form))]
pub async fn close(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ReturnForm>,
) -> Result<Redirect> {
    if let Some(id) = session::widget_id(&session, keys::ASSISTANT_WIDGET).await {
        if let Some(chat) = state.assistants().remove(id).await {
            chat.lock().await.close();
        }
        session::clear_widget_id(&session, keys::ASSISTANT_WIDGET).await?;
    }

    Ok(Redirect::to(safe_return_to(form.return_to.as_deref())))
}

/// Ask the advisor a question and wait for the answer.
///
/// POST /assistant/messages
///
/// Blank questions, questions sent while an answer is pending and questions
/// to a dismissed chat are ignored. The model call runs on its own task so a
/// dropped connection cannot leave the chat loading.
///
/// # Errors
///
/// Returns an error if the advisor task panicked.
#[instrument(skip(state, session, form), fields(query_len = form.query.len()))]
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<MessageForm>,
) -> Result<Redirect> {
    let Some((id, chat)) = current_chat(&state, &session).await else {
        tracing::debug!("No open advisor chat, question ignored");
        return Ok(Redirect::to(safe_return_to(form.return_to.as_deref())));
    };
    let language = session::language(&session).await;

    add_breadcrumb("assistant", "Question submitted", language);

    let query = form.query;
    let task_state = state.clone();
    let task = tokio::spawn(async move {
        request_advice(task_state.gemini(), &chat, &query, language).await
    });

    match task.await {
        Ok(Ok(())) => {}
        Ok(Err(reason)) => tracing::debug!(%reason, "Advisor submission ignored"),
        Err(e) => return Err(AppError::Internal(format!("advisor task failed: {e}"))),
    }
    state.assistants().refresh_weight(id).await;

    Ok(back_to_widget(form.return_to.as_deref()))
}

/// The visitor's open chat and its id, if any.
async fn current_chat(
    state: &AppState,
    session: &Session,
) -> Option<(Uuid, SharedWidget<AdvisorChat>)> {
    let id = session::widget_id(session, keys::ASSISTANT_WIDGET).await?;
    let chat = state.assistants().get(id).await?;
    Some((id, chat))
}

/// Keep the visitor's open chat, or start one greeting them in `language`.
async fn open_chat(state: &AppState, session: &Session, language: Language) -> Result<()> {
    if current_chat(state, session).await.is_some() {
        return Ok(());
    }

    let (id, _) = state.assistants().insert(AdvisorChat::open(language)).await;
    session::set_widget_id(session, keys::ASSISTANT_WIDGET, id).await?;
    Ok(())
}

/// Redirect to the originating page, scrolled to the chat.
fn back_to_widget(return_to: Option<&str>) -> Redirect {
    let target = safe_return_to(return_to);
    let target = target.split_once('#').map_or(target, |(path, _)| path);
    Redirect::to(&format!("{target}#assistant"))
}
