//! Localization store and per-render translator.
//!
//! Lookup order is the table of the current language, then the English table,
//! then the key itself. A key present in neither table renders as its own name,
//! which makes gaps visible on the page instead of leaving blank labels.

mod en;
mod ru;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::Language;

type Table = HashMap<&'static str, &'static str>;

static EN: LazyLock<Table> = LazyLock::new(|| en::STRINGS.iter().copied().collect());
static RU: LazyLock<Table> = LazyLock::new(|| ru::STRINGS.iter().copied().collect());

fn table(language: Language) -> &'static Table {
    match language {
        Language::En => &EN,
        Language::Ru => &RU,
    }
}

fn resolve<'a>(primary: &Table, fallback: &Table, key: &'a str) -> &'a str {
    primary
        .get(key)
        .or_else(|| fallback.get(key))
        .copied()
        .unwrap_or(key)
}

/// Translate `key` for `language`.
#[must_use]
pub fn lookup(language: Language, key: &str) -> &str {
    resolve(table(language), &EN, key)
}

/// Holds the visitor's language selection.
///
/// Written only by an explicit language choice; every view reads it through a
/// [`Translator`] snapshot taken at render time. Serializes as the bare locale
/// tag so it can be kept in the visitor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localization {
    language: Language,
}

impl Localization {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn current_language(&self) -> Language {
        self.language
    }

    pub const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translate `key` for the current language.
    #[must_use]
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.language, key)
    }

    /// Immutable snapshot handed to a view for one render.
    #[must_use]
    pub const fn snapshot(&self) -> Translator {
        Translator { store: *self }
    }
}

/// Immutable per-render view of the localization store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    store: Localization,
}

impl Translator {
    /// Translate a key.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.store.translate(key)
    }
}
