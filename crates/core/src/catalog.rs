//! Catalog filtering by category and subcategory.

use crate::models::Product;
use crate::types::{CategoryFilter, ProductCategory, Subcategory, SubcategoryFilter};

/// Products passing both the category and the subcategory test, in table order.
pub fn filter(
    products: &[Product],
    category: CategoryFilter,
    subcategory: SubcategoryFilter,
) -> impl Iterator<Item = &Product> {
    products
        .iter()
        .filter(move |p| category.matches(p.category) && subcategory.matches(p.subcategory))
}

/// The visitor's current catalog selection.
///
/// Subcategories are scoped to a category: choosing a category always resets the
/// subcategory to "all", and a subcategory is only accepted while its own
/// category is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSelection {
    category: CategoryFilter,
    subcategory: SubcategoryFilter,
}

impl CatalogSelection {
    /// Rebuild a selection from query-string slugs.
    ///
    /// Unknown category slugs select "All"; unknown or out-of-scope subcategory
    /// slugs are ignored.
    #[must_use]
    pub fn from_query(category: Option<&str>, subcategory: Option<&str>) -> Self {
        let mut selection = Self::default();
        selection.select_category(CategoryFilter::from_slug(category));
        if let Some(sub) = subcategory.and_then(Subcategory::from_slug) {
            selection.select_subcategory(SubcategoryFilter::Only(sub));
        }
        selection
    }

    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    #[must_use]
    pub const fn subcategory(&self) -> SubcategoryFilter {
        self.subcategory
    }

    /// Switch category; the subcategory goes back to "all".
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.subcategory = SubcategoryFilter::All;
    }

    /// Narrow to a subcategory of the active category.
    ///
    /// Returns `false` and leaves the selection untouched when no single category
    /// is active or `subcategory` belongs to a different one.
    pub fn select_subcategory(&mut self, subcategory: SubcategoryFilter) -> bool {
        let accepted = match (self.category, subcategory) {
            (_, SubcategoryFilter::All) => true,
            (CategoryFilter::Only(category), SubcategoryFilter::Only(sub)) => {
                category.has_subcategory(sub)
            }
            (CategoryFilter::All, SubcategoryFilter::Only(_)) => false,
        };
        if accepted {
            self.subcategory = subcategory;
        }
        accepted
    }

    /// Subcategory buttons to offer for the active category.
    #[must_use]
    pub const fn available_subcategories(&self) -> &'static [Subcategory] {
        match self.category {
            CategoryFilter::All => &[],
            CategoryFilter::Only(category) => category.subcategories(),
        }
    }

    /// The active category, if one is selected.
    #[must_use]
    pub const fn active_category(&self) -> Option<ProductCategory> {
        match self.category {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }

    /// Apply this selection to a product table.
    pub fn apply<'a>(
        &self,
        products: &'a [Product],
    ) -> impl Iterator<Item = &'a Product> + use<'a> {
        filter(products, self.category, self.subcategory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    fn products() -> Vec<Product> {
        ContentStore::load()
            .expect("bundled content should load")
            .products()
            .to_vec()
    }

    fn is_subsequence(sub: &[&Product], all: &[Product]) -> bool {
        let mut rest = all.iter();
        sub.iter()
            .all(|wanted| rest.any(|candidate| candidate.id == wanted.id))
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let products = products();
        let out: Vec<_> = filter(&products, CategoryFilter::All, SubcategoryFilter::All).collect();
        assert_eq!(out.len(), products.len());
        assert!(is_subsequence(&out, &products));
    }

    #[test]
    fn test_filter_is_stable_subsequence_for_every_pair() {
        let products = products();
        for category in ProductCategory::ALL {
            let mut filters = vec![SubcategoryFilter::All];
            filters.extend(category.subcategories().iter().copied().map(SubcategoryFilter::Only));

            for sub in filters {
                let out: Vec<_> = filter(&products, CategoryFilter::Only(category), sub).collect();
                assert!(is_subsequence(&out, &products));
                assert!(out.iter().all(|p| p.category == category && sub.matches(p.subcategory)));

                let expected = products
                    .iter()
                    .filter(|p| p.category == category && sub.matches(p.subcategory))
                    .count();
                assert_eq!(out.len(), expected);
            }
        }
    }

    #[test]
    fn test_manual_subcategory_stays_within_category() {
        let products = products();
        let tools: Vec<_> = filter(
            &products,
            CategoryFilter::Only(ProductCategory::Tools),
            SubcategoryFilter::Only(Subcategory::Manual),
        )
        .collect();
        assert!(!tools.is_empty());
        assert!(tools.iter().all(|p| p.category == ProductCategory::Tools));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let products = products();
        let out: Vec<_> = filter(
            &products,
            CategoryFilter::Only(ProductCategory::Consumables),
            SubcategoryFilter::Only(Subcategory::Battery),
        )
        .collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_select_category_resets_subcategory() {
        let mut selection = CatalogSelection::default();
        selection.select_category(CategoryFilter::Only(ProductCategory::Boxes));
        assert!(selection.select_subcategory(SubcategoryFilter::Only(Subcategory::Food)));
        assert_eq!(
            selection.subcategory(),
            SubcategoryFilter::Only(Subcategory::Food)
        );

        for next in [
            CategoryFilter::All,
            CategoryFilter::Only(ProductCategory::Boxes),
            CategoryFilter::Only(ProductCategory::Tools),
        ] {
            let mut s = selection;
            s.select_category(next);
            assert_eq!(s.subcategory(), SubcategoryFilter::All);
            assert_eq!(s.category(), next);
        }
    }

    #[test]
    fn test_select_subcategory_rejects_foreign_subcategory() {
        let mut selection = CatalogSelection::default();
        assert!(!selection.select_subcategory(SubcategoryFilter::Only(Subcategory::Food)));

        selection.select_category(CategoryFilter::Only(ProductCategory::PetStrap));
        assert!(!selection.select_subcategory(SubcategoryFilter::Only(Subcategory::Food)));
        assert_eq!(selection.subcategory(), SubcategoryFilter::All);
    }

    #[test]
    fn test_from_query() {
        let selection = CatalogSelection::from_query(Some("stretch-film"), Some("machine"));
        assert_eq!(
            selection.active_category(),
            Some(ProductCategory::StretchFilm)
        );
        assert_eq!(
            selection.subcategory(),
            SubcategoryFilter::Only(Subcategory::Machine)
        );

        let foreign = CatalogSelection::from_query(Some("boxes"), Some("battery"));
        assert_eq!(foreign.subcategory(), SubcategoryFilter::All);

        let unknown = CatalogSelection::from_query(Some("pallets"), Some("food"));
        assert_eq!(unknown, CatalogSelection::default());
    }

    #[test]
    fn test_available_subcategories() {
        let mut selection = CatalogSelection::default();
        assert!(selection.available_subcategories().is_empty());
        selection.select_category(CategoryFilter::Only(ProductCategory::Tools));
        assert_eq!(selection.available_subcategories().len(), 3);
    }
}
