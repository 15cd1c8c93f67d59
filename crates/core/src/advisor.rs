//! Transcript state for the packaging advice chat.
//!
//! The chat never talks to the network itself. [`AdvisorChat::submit`] validates
//! a query, records it and hands back a [`PendingAdvice`] describing the one
//! outgoing request; the caller performs the request and reports back through
//! [`AdvisorChat::complete`] or [`AdvisorChat::fail`].

use crate::i18n;
use crate::types::{ChatMessage, Language, SubmitError};

/// System instruction sent with every advice request.
pub const SYSTEM_PERSONA: &str = "You are 'StrapMaster', an expert industrial packaging engineer. \
You specialize in load containment, pallet security, and strapping materials (PET, PP, Steel). \
Provide technical, safety-conscious advice to warehouse managers and logistics coordinators. \
Focus on tensile strength, elongation recovery, and proper tool selection. \
Keep answers professional and concise (under 150 words).";

/// Appended to the outgoing prompt when the visitor reads the Russian site.
pub const RUSSIAN_HINT: &str = " (Please answer in Russian language)";

/// Suggested questions are offered until the transcript reaches this length.
const SUGGESTIONS_BELOW: usize = 3;

const SUGGESTION_KEYS: [&str; 3] = [
    "assistant.suggested_1",
    "assistant.suggested_2",
    "assistant.suggested_3",
];

/// Build the outgoing prompt for a visitor query.
#[must_use]
pub fn prompt_for(query: &str, language: Language) -> String {
    match language {
        Language::En => query.to_owned(),
        Language::Ru => format!("{query}{RUSSIAN_HINT}"),
    }
}

/// Starter questions for the given locale.
#[must_use]
pub fn suggested_questions(language: Language) -> [&'static str; 3] {
    SUGGESTION_KEYS.map(|key| i18n::lookup(language, key))
}

/// The one outstanding advice request of a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAdvice {
    prompt: String,
    language: Language,
    seq: u64,
}

impl PendingAdvice {
    /// Prompt to send, language hint included.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Locale active when the query was submitted.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }
}

/// An open advice chat: transcript plus in-flight bookkeeping.
#[derive(Debug, Clone)]
pub struct AdvisorChat {
    messages: Vec<ChatMessage>,
    in_flight: Option<u64>,
    next_seq: u64,
    closed: bool,
}

impl AdvisorChat {
    /// Open a chat seeded with the greeting for `language`.
    #[must_use]
    pub fn open(language: Language) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(i18n::lookup(
                language,
                "assistant.greeting",
            ))],
            in_flight: None,
            next_seq: 0,
            closed: false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is outstanding; new submissions are refused meanwhile.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the starter questions should still be offered.
    #[must_use]
    pub fn shows_suggestions(&self) -> bool {
        self.messages.len() < SUGGESTIONS_BELOW
    }

    /// Record a visitor query and describe the request to make.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Empty`] for blank input, [`SubmitError::Busy`]
    /// while a reply is outstanding and [`SubmitError::Closed`] after the chat
    /// was dismissed. The transcript is untouched in every error case.
    pub fn submit(
        &mut self,
        query: &str,
        language: Language,
    ) -> Result<PendingAdvice, SubmitError> {
        if self.closed {
            return Err(SubmitError::Closed);
        }
        if query.trim().is_empty() {
            return Err(SubmitError::Empty);
        }
        if self.in_flight.is_some() {
            return Err(SubmitError::Busy);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.messages.push(ChatMessage::user(query));

        Ok(PendingAdvice {
            prompt: prompt_for(query, language),
            language,
            seq,
        })
    }

    /// Record the service reply. Empty replies become the fixed fallback text.
    ///
    /// Returns `false` when the chat was dismissed or `pending` is not the
    /// outstanding request; nothing changes in that case.
    pub fn complete(&mut self, pending: &PendingAdvice, reply: Option<&str>) -> bool {
        if !self.settle(pending) {
            return false;
        }
        let text = match reply {
            Some(text) if !text.trim().is_empty() => text,
            _ => i18n::lookup(pending.language, "assistant.fallback"),
        };
        self.messages.push(ChatMessage::assistant(text));
        true
    }

    /// Record a failed request as a flagged, localized error entry.
    ///
    /// Returns `false` when the chat was dismissed or `pending` is not the
    /// outstanding request.
    pub fn fail(&mut self, pending: &PendingAdvice) -> bool {
        if !self.settle(pending) {
            return false;
        }
        self.messages.push(ChatMessage::assistant_error(i18n::lookup(
            pending.language,
            "assistant.error",
        )));
        true
    }

    /// Dismiss the chat. Late replies are discarded from here on.
    pub const fn close(&mut self) {
        self.closed = true;
        self.in_flight = None;
    }

    fn settle(&mut self, pending: &PendingAdvice) -> bool {
        if self.closed || self.in_flight != Some(pending.seq) {
            return false;
        }
        self.in_flight = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;

    #[test]
    fn test_open_seeds_greeting() {
        let chat = AdvisorChat::open(Language::Ru);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, ChatRole::Assistant);
        assert!(chat.messages()[0].text.contains("StrapMaster"));
        assert!(chat.shows_suggestions());
        assert!(!chat.is_loading());
    }

    #[test]
    fn test_blank_queries_are_rejected() {
        let mut chat = AdvisorChat::open(Language::En);
        assert_eq!(chat.submit("", Language::En), Err(SubmitError::Empty));
        assert_eq!(chat.submit("   ", Language::En), Err(SubmitError::Empty));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_loading());
    }

    #[test]
    fn test_successful_round_trip() {
        let mut chat = AdvisorChat::open(Language::En);
        let pending = chat
            .submit("What is the break strength of 19mm PET?", Language::En)
            .expect("submit");
        assert!(chat.is_loading());
        assert_eq!(pending.prompt(), "What is the break strength of 19mm PET?");

        assert!(chat.complete(&pending, Some("1,400 lbs typical.")));
        assert!(!chat.is_loading());

        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages[1],
            ChatMessage::user("What is the break strength of 19mm PET?")
        );
        assert_eq!(messages[2], ChatMessage::assistant("1,400 lbs typical."));
        assert!(!chat.shows_suggestions());
    }

    #[test]
    fn test_failure_appends_localized_error() {
        let mut chat = AdvisorChat::open(Language::Ru);
        let pending = chat.submit("Сталь или ПЭТ?", Language::Ru).expect("submit");
        assert!(chat.fail(&pending));

        let last = chat.messages().last().expect("entry");
        assert!(last.is_error);
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.text, "Ошибка связи с сервером.");
        assert!(!chat.is_loading());
    }

    #[test]
    fn test_empty_reply_uses_fallback() {
        let mut chat = AdvisorChat::open(Language::En);
        let pending = chat.submit("hello", Language::En).expect("submit");
        assert!(chat.complete(&pending, None));
        assert_eq!(
            chat.messages().last().map(|m| m.text.as_str()),
            Some("I'm sorry, I couldn't generate advice at this moment.")
        );

        let pending = chat.submit("again", Language::En).expect("submit");
        assert!(chat.complete(&pending, Some("  ")));
        assert!(!chat.messages().last().expect("entry").is_error);
    }

    #[test]
    fn test_reply_is_stored_verbatim() {
        let mut chat = AdvisorChat::open(Language::En);
        let pending = chat.submit("Strap sizes?", Language::En).expect("submit");
        let reply = "    12mm: light cartons\n    19mm: brick pallets\n";
        assert!(chat.complete(&pending, Some(reply)));

        assert_eq!(chat.messages().last(), Some(&ChatMessage::assistant(reply)));
    }

    #[test]
    fn test_russian_prompt_carries_hint() {
        let mut chat = AdvisorChat::open(Language::Ru);
        let pending = chat.submit("Какая лента?", Language::Ru).expect("submit");
        assert_eq!(
            pending.prompt(),
            "Какая лента? (Please answer in Russian language)"
        );
        assert_eq!(chat.messages().last().expect("entry").text, "Какая лента?");
    }

    #[test]
    fn test_pending_request_is_exclusive() {
        let mut chat = AdvisorChat::open(Language::En);
        let first = chat.submit("one", Language::En).expect("submit");
        assert_eq!(chat.submit("two", Language::En), Err(SubmitError::Busy));
        assert_eq!(chat.messages().len(), 2);

        assert!(chat.complete(&first, Some("done")));
        assert!(!chat.complete(&first, Some("again")));
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn test_late_reply_after_close_is_discarded() {
        let mut chat = AdvisorChat::open(Language::En);
        let pending = chat.submit("question", Language::En).expect("submit");
        chat.close();

        assert!(!chat.complete(&pending, Some("late")));
        assert!(!chat.fail(&pending));
        assert_eq!(chat.messages().len(), 2);
        assert!(!chat.is_loading());
        assert_eq!(chat.submit("more", Language::En), Err(SubmitError::Closed));
    }

    #[test]
    fn test_suggested_questions_per_locale() {
        assert_eq!(
            suggested_questions(Language::En)[0],
            "What is the break strength of 19mm PET?"
        );
        assert_eq!(
            suggested_questions(Language::Ru)[2],
            "Какой инструмент нужен для кирпича?"
        );
    }
}
