//! Application state shared across handlers.

use std::sync::Arc;

use turanpet_core::advisor::AdvisorChat;
use turanpet_core::content::{ContentError, ContentStore};
use turanpet_core::visualizer::ImageSlot;

use crate::config::SiteConfig;
use crate::gemini::{GeminiClient, GeminiError};
use crate::services::WidgetStore;

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("content error: {0}")]
    Content(#[from] ContentError),
    #[error("gemini client error: {0}")]
    Gemini(#[from] GeminiError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// content tables, the model client and the widget registries.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: ContentStore,
    gemini: GeminiClient,
    assistants: WidgetStore<AdvisorChat>,
    visualizers: WidgetStore<ImageSlot>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled content fails validation or the API
    /// client cannot be built from the configuration.
    pub fn new(config: SiteConfig) -> Result<Self, StateError> {
        let content = ContentStore::load()?;
        let gemini = GeminiClient::new(&config.gemini)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                gemini,
                assistants: WidgetStore::new(),
                visualizers: WidgetStore::new(),
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the bundled content tables.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the Generative Language API client.
    #[must_use]
    pub fn gemini(&self) -> &GeminiClient {
        &self.inner.gemini
    }

    /// Open advisor chats, keyed by the id stored in the visitor session.
    #[must_use]
    pub fn assistants(&self) -> &WidgetStore<AdvisorChat> {
        &self.inner.assistants
    }

    /// Visualizer slots, keyed by the id stored in the visitor session.
    #[must_use]
    pub fn visualizers(&self) -> &WidgetStore<ImageSlot> {
        &self.inner.visualizers
    }
}
