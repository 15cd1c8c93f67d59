//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are indicative list prices; most B2B lines are sold on quote and
//! carry no price at all. The amount is stored once and presented per locale:
//! dollars for the English site, rubles for the Russian one.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Language;

/// An indicative list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in the currency's standard unit (not cents).
    pub amount: Decimal,
}

/// Where a price is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceStyle {
    /// Listing cards: Russian prices read "from N ₽".
    Starting,
    /// Product detail: the bare amount.
    Exact,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Format for display in the given locale.
    ///
    /// Trailing zeros are dropped, so `45.00` renders as `$45` and `62.50` as `$62.5`.
    #[must_use]
    pub fn display(&self, language: Language, style: PriceStyle) -> String {
        let amount = self.amount.normalize();
        match (language, style) {
            (Language::En, _) => format!("${amount}"),
            (Language::Ru, PriceStyle::Starting) => format!("от {amount} ₽"),
            (Language::Ru, PriceStyle::Exact) => format!("{amount} ₽"),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount.normalize())
    }
}
