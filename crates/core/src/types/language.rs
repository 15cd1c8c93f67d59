//! Locale tags supported by the site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two supported locale tags.
///
/// Serialized as the lowercase tag (`"en"`, `"ru"`), which is also the value
/// accepted by the language switcher form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// A locale tag outside the supported pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language tag: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// All supported locales, in switcher order.
    pub const ALL: [Self; 2] = [Self::En, Self::Ru];

    /// The lowercase locale tag.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// The language's own name, as shown in the switcher.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    /// Locale identifier used by the map widget for tiles and labels.
    #[must_use]
    pub const fn map_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Ru => "ru_RU",
        }
    }

    /// Pick the Russian variant of a field when this locale asks for it and the
    /// variant exists; the English field is the fallback otherwise.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, ru: Option<&'a str>) -> &'a str {
        match (self, ru) {
            (Self::Ru, Some(ru)) => ru,
            _ => en,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(UnknownLanguage(other.to_owned())),
        }
    }
}
