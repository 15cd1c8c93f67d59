//! Product categories and their category-scoped subcategories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed enumeration partitioning the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "PET Strap")]
    PetStrap,
    #[serde(rename = "Stretch Film")]
    StretchFilm,
    #[serde(rename = "Boxes")]
    Boxes,
    #[serde(rename = "Tools")]
    Tools,
    #[serde(rename = "Consumables")]
    Consumables,
}

impl ProductCategory {
    /// All categories, in tab order.
    pub const ALL: [Self; 5] = [
        Self::PetStrap,
        Self::StretchFilm,
        Self::Boxes,
        Self::Tools,
        Self::Consumables,
    ];

    /// URL slug used in catalog query strings.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PetStrap => "pet-strap",
            Self::StretchFilm => "stretch-film",
            Self::Boxes => "boxes",
            Self::Tools => "tools",
            Self::Consumables => "consumables",
        }
    }

    /// Parse a catalog query slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Translation key for the category label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::PetStrap => "cat.pet",
            Self::StretchFilm => "cat.film",
            Self::Boxes => "cat.boxes",
            Self::Tools => "cat.tools",
            Self::Consumables => "cat.consumables",
        }
    }

    /// Subcategories offered for this category, in button order.
    #[must_use]
    pub const fn subcategories(self) -> &'static [Subcategory] {
        match self {
            Self::PetStrap => &[Subcategory::Embossed, Subcategory::Smooth],
            Self::StretchFilm => &[Subcategory::Manual, Subcategory::Machine],
            Self::Boxes => &[
                Subcategory::FourFlap,
                Subcategory::Food,
                Subcategory::SelfAssembling,
                Subcategory::Sheets,
            ],
            Self::Tools => &[
                Subcategory::Battery,
                Subcategory::Pneumatic,
                Subcategory::Manual,
            ],
            Self::Consumables => &[],
        }
    }

    /// Whether `sub` belongs to this category.
    #[must_use]
    pub fn has_subcategory(self, sub: Subcategory) -> bool {
        self.subcategories().contains(&sub)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PetStrap => "PET Strap",
            Self::StretchFilm => "Stretch Film",
            Self::Boxes => "Boxes",
            Self::Tools => "Tools",
            Self::Consumables => "Consumables",
        })
    }
}

/// Category-scoped product subcategory.
///
/// `Manual` is shared between stretch film and tools; the category test always
/// runs first, so the overlap is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subcategory {
    Embossed,
    Smooth,
    Manual,
    Machine,
    #[serde(rename = "4-flap")]
    FourFlap,
    Food,
    SelfAssembling,
    Sheets,
    Battery,
    Pneumatic,
}

impl Subcategory {
    const ALL: [Self; 10] = [
        Self::Embossed,
        Self::Smooth,
        Self::Manual,
        Self::Machine,
        Self::FourFlap,
        Self::Food,
        Self::SelfAssembling,
        Self::Sheets,
        Self::Battery,
        Self::Pneumatic,
    ];

    /// URL slug, identical to the serialized form.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Embossed => "embossed",
            Self::Smooth => "smooth",
            Self::Manual => "manual",
            Self::Machine => "machine",
            Self::FourFlap => "4-flap",
            Self::Food => "food",
            Self::SelfAssembling => "self-assembling",
            Self::Sheets => "sheets",
            Self::Battery => "battery",
            Self::Pneumatic => "pneumatic",
        }
    }

    /// Parse a catalog query slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Translation key for the subcategory label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Embossed => "subcat.embossed",
            Self::Smooth => "subcat.smooth",
            Self::Manual => "subcat.manual",
            Self::Machine => "subcat.machine",
            Self::FourFlap => "subcat.4-flap",
            Self::Food => "subcat.food",
            Self::SelfAssembling => "subcat.self-assembling",
            Self::Sheets => "subcat.sheets",
            Self::Battery => "subcat.battery",
            Self::Pneumatic => "subcat.pneumatic",
        }
    }
}

/// Category selection: the "All" sentinel or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    /// Whether a product of `category` passes.
    #[must_use]
    pub fn matches(self, category: ProductCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Parse a query slug; anything unrecognised selects "All".
    #[must_use]
    pub fn from_slug(slug: Option<&str>) -> Self {
        slug.and_then(ProductCategory::from_slug)
            .map_or(Self::All, Self::Only)
    }
}

/// Subcategory selection: the "all" sentinel or one subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubcategoryFilter {
    #[default]
    All,
    Only(Subcategory),
}

impl SubcategoryFilter {
    /// Whether a product with `subcategory` passes.
    #[must_use]
    pub fn matches(self, subcategory: Option<Subcategory>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => subcategory == Some(wanted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_round_trip() {
        for category in ProductCategory::ALL {
            assert_eq!(ProductCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(ProductCategory::from_slug("pallets"), None);
    }

    #[test]
    fn test_subcategory_slug_matches_serde() {
        for sub in Subcategory::ALL {
            let json = serde_json::to_string(&sub).expect("serialize");
            assert_eq!(json, format!("\"{}\"", sub.slug()));
        }
    }

    #[test]
    fn test_category_serde_uses_display_name() {
        let json = serde_json::to_string(&ProductCategory::StretchFilm).expect("serialize");
        assert_eq!(json, "\"Stretch Film\"");
        assert_eq!(ProductCategory::StretchFilm.to_string(), "Stretch Film");
    }

    #[test]
    fn test_consumables_have_no_subcategories() {
        assert!(ProductCategory::Consumables.subcategories().is_empty());
        assert!(ProductCategory::Tools.has_subcategory(Subcategory::Manual));
        assert!(ProductCategory::StretchFilm.has_subcategory(Subcategory::Manual));
        assert!(!ProductCategory::Boxes.has_subcategory(Subcategory::Manual));
    }

    #[test]
    fn test_category_filter_from_unknown_slug_is_all() {
        assert_eq!(CategoryFilter::from_slug(Some("nope")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_slug(None), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_slug(Some("boxes")),
            CategoryFilter::Only(ProductCategory::Boxes)
        );
    }

    #[test]
    fn test_subcategory_filter_requires_exact_match() {
        let filter = SubcategoryFilter::Only(Subcategory::Food);
        assert!(filter.matches(Some(Subcategory::Food)));
        assert!(!filter.matches(Some(Subcategory::Sheets)));
        assert!(!filter.matches(None));
        assert!(SubcategoryFilter::All.matches(None));
    }
}
