//! Product records: the main catalog table plus the flat strap and tool listings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    Language, Price, PriceStyle, ProductCategory, ProductId, StrapId, Subcategory, ToolId,
};

/// Number of specification rows shown on a catalog card.
const CARD_SPEC_ROWS: usize = 2;

/// One row of a product's specification table.
///
/// Stored as a `[label, value]` pair so the table keeps its authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

impl From<(String, String)> for SpecRow {
    fn from((label, value): (String, String)) -> Self {
        Self { label, value }
    }
}

impl From<SpecRow> for (String, String) {
    fn from(row: SpecRow) -> Self {
        (row.label, row.value)
    }
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category: ProductCategory,
    #[serde(default)]
    pub subcategory: Option<Subcategory>,
    pub name: String,
    #[serde(default)]
    pub name_ru: Option<String>,
    pub description: String,
    #[serde(default)]
    pub description_ru: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub full_description_ru: Option<String>,
    /// Indicative price; quote-only lines have none.
    #[serde(default)]
    pub price: Option<Price>,
    pub image_url: String,
    pub specs: Vec<SpecRow>,
    #[serde(default)]
    pub specs_ru: Option<Vec<SpecRow>>,
    pub in_stock: bool,
}

impl Product {
    /// Display name in the given locale.
    #[must_use]
    pub fn name(&self, language: Language) -> &str {
        language.pick(&self.name, self.name_ru.as_deref())
    }

    /// Short description in the given locale.
    #[must_use]
    pub fn description(&self, language: Language) -> &str {
        language.pick(&self.description, self.description_ru.as_deref())
    }

    /// Long description for the detail page.
    ///
    /// Russian full text wins when requested; otherwise the English full text,
    /// and finally the short English description.
    #[must_use]
    pub fn full_description(&self, language: Language) -> &str {
        match (language, self.full_description_ru.as_deref()) {
            (Language::Ru, Some(ru)) => ru,
            _ => self
                .full_description
                .as_deref()
                .unwrap_or(&self.description),
        }
    }

    /// The full specification table in the given locale.
    #[must_use]
    pub fn specs(&self, language: Language) -> &[SpecRow] {
        match (language, self.specs_ru.as_deref()) {
            (Language::Ru, Some(ru)) => ru,
            _ => &self.specs,
        }
    }

    /// The leading rows shown on a catalog card.
    #[must_use]
    pub fn card_specs(&self, language: Language) -> &[SpecRow] {
        let specs = self.specs(language);
        specs.get(..CARD_SPEC_ROWS).unwrap_or(specs)
    }

    /// Formatted price, if the product has one.
    #[must_use]
    pub fn price_label(&self, language: Language, style: PriceStyle) -> Option<String> {
        self.price.map(|price| price.display(language, style))
    }
}

/// Strap material, used as the filter on the strap inventory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrapMaterial {
    #[serde(rename = "PET")]
    Pet,
    #[serde(rename = "PP")]
    Pp,
    Steel,
    Cord,
}

impl StrapMaterial {
    /// All materials, in filter-button order.
    pub const ALL: [Self; 4] = [Self::Pet, Self::Pp, Self::Steel, Self::Cord];

    /// The material tag as shown and as used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pet => "PET",
            Self::Pp => "PP",
            Self::Steel => "Steel",
            Self::Cord => "Cord",
        }
    }

    /// Parse a query-string tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == tag)
    }
}

impl fmt::Display for StrapMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coil of strap on the inventory listing. Not localized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrapProduct {
    pub id: StrapId,
    pub name: String,
    pub width: String,
    pub thickness: String,
    pub break_strength: String,
    #[serde(rename = "type")]
    pub material: StrapMaterial,
    pub image_url: String,
    pub description: String,
    /// Price per coil.
    pub price: Price,
}

/// An application tool on the tool shop listing. Not localized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolProduct {
    pub id: ToolId,
    pub name: String,
    /// Free-form shop category ("Pneumatic", "Accessories", ...).
    pub category: String,
    pub price: Price,
    pub rating: f32,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new("pet-16-embossed"),
            category: ProductCategory::PetStrap,
            subcategory: Some(Subcategory::Embossed),
            name: "PET Strap 16mm".to_string(),
            name_ru: Some("ПЭТ лента 16мм".to_string()),
            description: "Embossed strap".to_string(),
            description_ru: None,
            full_description: None,
            full_description_ru: None,
            price: Some(Price::new(Decimal::new(45, 0))),
            image_url: "https://images.unsplash.com/photo-1".to_string(),
            specs: vec![
                SpecRow::from(("Width".to_string(), "16 mm".to_string())),
                SpecRow::from(("Thickness".to_string(), "0.8 mm".to_string())),
                SpecRow::from(("Break strength".to_string(), "400 kg".to_string())),
            ],
            specs_ru: None,
            in_stock: true,
        }
    }

    #[test]
    fn test_localized_fields_fall_back_to_english() {
        let product = product();
        assert_eq!(product.name(Language::Ru), "ПЭТ лента 16мм");
        assert_eq!(product.name(Language::En), "PET Strap 16mm");
        assert_eq!(product.description(Language::Ru), "Embossed strap");
        assert_eq!(product.specs(Language::Ru).len(), 3);
    }

    #[test]
    fn test_full_description_falls_back_to_short() {
        let mut product = product();
        assert_eq!(product.full_description(Language::Ru), "Embossed strap");

        product.full_description = Some("Long text".to_string());
        assert_eq!(product.full_description(Language::Ru), "Long text");

        product.full_description_ru = Some("Длинный текст".to_string());
        assert_eq!(product.full_description(Language::Ru), "Длинный текст");
        assert_eq!(product.full_description(Language::En), "Long text");
    }

    #[test]
    fn test_card_specs_take_first_two_rows() {
        let product = product();
        let rows = product.card_specs(Language::En);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Width");

        let mut short = product.clone();
        short.specs.truncate(1);
        assert_eq!(short.card_specs(Language::En).len(), 1);
    }

    #[test]
    fn test_price_label() {
        let product = product();
        assert_eq!(
            product.price_label(Language::Ru, PriceStyle::Starting).as_deref(),
            Some("от 45 ₽")
        );

        let quote_only = Product {
            price: None,
            ..product
        };
        assert_eq!(quote_only.price_label(Language::En, PriceStyle::Exact), None);
    }

    #[test]
    fn test_spec_rows_deserialize_from_pairs() {
        let rows: Vec<SpecRow> =
            serde_json::from_str(r#"[["Width", "19 mm"], ["Color", "Green"]]"#).expect("parse");
        assert_eq!(rows[1].label, "Color");
        assert_eq!(rows[1].value, "Green");
    }

    #[test]
    fn test_strap_material_tags() {
        for material in StrapMaterial::ALL {
            assert_eq!(StrapMaterial::from_tag(material.as_str()), Some(material));
        }
        assert_eq!(StrapMaterial::from_tag("pet"), None);
    }
}
