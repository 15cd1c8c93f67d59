//! Per-request page context: language snapshot, navigation and widget state.
//!
//! Every full page embeds a [`PageContext`]. It is built once per request
//! from the visitor session and handed to the template as an immutable value,
//! so a page never sees the language change halfway through a render.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use turanpet_core::advisor::{AdvisorChat, suggested_questions};
use turanpet_core::i18n::{Localization, Translator};
use turanpet_core::{ChatRole, Language};

use crate::middleware::session::{self, keys};
use crate::state::AppState;

/// Navigation targets and their label keys, in menu order.
const NAV_ITEMS: [(&str, &str); 6] = [
    ("/", "nav.home"),
    ("/catalog", "nav.products"),
    ("/production", "nav.production"),
    ("/about", "nav.company"),
    ("/blog", "nav.news"),
    ("/contact", "nav.contacts"),
];

/// A top navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// An entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub active: bool,
}

/// A transcript entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub is_user: bool,
    pub is_error: bool,
    pub text: String,
}

/// Snapshot of the open advisor chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantView {
    pub messages: Vec<MessageView>,
    pub loading: bool,
    pub suggestions: Vec<&'static str>,
}

impl AssistantView {
    /// Capture the chat as it is now.
    #[must_use]
    pub fn capture(chat: &AdvisorChat, language: Language) -> Self {
        let messages = chat
            .messages()
            .iter()
            .map(|m| MessageView {
                is_user: m.role == ChatRole::User,
                is_error: m.is_error,
                text: m.text.clone(),
            })
            .collect();
        let suggestions = if chat.shows_suggestions() {
            suggested_questions(language).to_vec()
        } else {
            Vec::new()
        };

        Self {
            messages,
            loading: chat.is_loading(),
            suggestions,
        }
    }
}

/// Everything the shared layout needs to render a page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub language: Language,
    translator: Translator,
    /// Path and query of the current page, used as the return target of forms.
    pub current: String,
    pub nav: Vec<NavItem>,
    pub languages: Vec<LanguageOption>,
    /// The advisor chat, when the visitor has one open.
    pub assistant: Option<AssistantView>,
}

impl PageContext {
    /// Build a context for `path_and_query` without an open chat.
    #[must_use]
    pub fn new(localization: &Localization, path_and_query: &str) -> Self {
        let language = localization.current_language();
        let translator = localization.snapshot();
        let path = path_and_query
            .split_once('?')
            .map_or(path_and_query, |(path, _)| path);

        let nav = NAV_ITEMS
            .iter()
            .map(|&(href, key)| NavItem {
                href,
                label: translator.t(key),
                active: is_active(path, href),
            })
            .collect();
        let languages = Language::ALL
            .into_iter()
            .map(|option| LanguageOption {
                code: option.code(),
                name: option.native_name(),
                active: option == language,
            })
            .collect();

        Self {
            language,
            translator,
            current: path_and_query.to_string(),
            nav,
            languages,
            assistant: None,
        }
    }

    /// Translate a key for the page language.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.t(key)
    }

    /// Locale tag for the `lang` attribute.
    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.language.code()
    }
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path_and_query = parts
            .uri
            .path_and_query()
            .map_or("/", |pq| pq.as_str());

        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            return Ok(Self::new(&Localization::default(), path_and_query));
        };

        let localization = session::localization(&session).await;
        let language = localization.current_language();
        let mut context = Self::new(&localization, path_and_query);

        if let Some(id) = session::widget_id(&session, keys::ASSISTANT_WIDGET).await
            && let Some(chat) = state.assistants().get(id).await
        {
            let chat = chat.lock().await;
            if !chat.is_closed() {
                context.assistant = Some(AssistantView::capture(&chat, language));
            }
        }

        Ok(context)
    }
}

/// Whether a navigation item pointing at `href` is active on `path`.
///
/// The root only matches itself; other items also match their sub-paths.
#[must_use]
pub fn is_active(path: &str, href: &str) -> bool {
    path == href || (href != "/" && path.starts_with(href))
}

/// Accept only same-site absolute paths as a post-action redirect target.
#[must_use]
pub fn safe_return_to(candidate: Option<&str>) -> &str {
    match candidate {
        Some(target) if is_site_path(target) => target,
        _ => "/",
    }
}

/// A path on this site that a browser cannot reinterpret as another origin.
///
/// Browsers drop TAB, CR and LF from URLs and read `\` as `/`, so any of them
/// could turn `/x` into a protocol-relative `//host`. Other control bytes are
/// not valid in a `Location` header at all.
fn is_site_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(|c| c.is_ascii_control())
}
