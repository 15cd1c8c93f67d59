//! Language switch route handler.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use turanpet_core::Language;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::safe_return_to;
use crate::middleware::session;

/// Language switch form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Switch the visitor's language and reload the page they were on.
///
/// POST /language
///
/// # Errors
///
/// Returns 400 for a tag other than `en` or `ru`, or an error if the session
/// cannot be written.
#[instrument(skip(session, form), fields(lang = %form.lang))]
pub async fn switch(session: Session, Form(form): Form<LanguageForm>) -> Result<Redirect> {
    let language = form
        .lang
        .parse::<Language>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    session::set_language(&session, language).await?;
    add_breadcrumb("language", "Language switched", language);

    Ok(Redirect::to(safe_return_to(form.return_to.as_deref())))
}
