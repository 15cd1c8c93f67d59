//! Session middleware configuration.
//!
//! Sessions live in process memory: they only carry the language choice and
//! the ids of the visitor's widgets, none of which outlives a restart.

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use uuid::Uuid;

use turanpet_core::Language;
use turanpet_core::i18n::Localization;

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "turanpet_session";

/// Session expiry time in seconds (1 day of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Session keys.
pub mod keys {
    /// The visitor's language choice.
    pub const LANGUAGE: &str = "language";

    /// Id of the open advisor chat.
    pub const ASSISTANT_WIDGET: &str = "assistant_widget";

    /// Id of the visualizer slot.
    pub const VISUALIZER_WIDGET: &str = "visualizer_widget";
}

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &SiteConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// The visitor's localization store; English until they choose otherwise.
pub async fn localization(session: &Session) -> Localization {
    session
        .get::<Localization>(keys::LANGUAGE)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// The visitor's current language.
pub async fn language(session: &Session) -> Language {
    localization(session).await.current_language()
}

/// Record the visitor's language choice.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_language(
    session: &Session,
    language: Language,
) -> Result<(), tower_sessions::session::Error> {
    let mut store = localization(session).await;
    store.set_language(language);
    session.insert(keys::LANGUAGE, store).await
}

/// Read a widget id stored under `key`.
pub async fn widget_id(session: &Session, key: &str) -> Option<Uuid> {
    session.get::<Uuid>(key).await.ok().flatten()
}

/// Store a widget id under `key`.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_widget_id(
    session: &Session,
    key: &str,
    id: Uuid,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(key, id).await
}

/// Forget the widget id stored under `key`.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_widget_id(
    session: &Session,
    key: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Uuid>(key).await.map(|_| ())
}
