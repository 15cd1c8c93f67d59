//! Content store for the tables bundled with the site.
//!
//! The tables are JSON documents under `data/`, compiled into the binary and
//! parsed once at startup. A table that fails to parse or validate stops the
//! site from starting rather than rendering a half-empty catalog.

use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    BlogPost, Location, LocationKind, Product, StrapMaterial, StrapProduct, ToolProduct,
};

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const STRAPS_JSON: &str = include_str!("../data/straps.json");
const TOOLS_JSON: &str = include_str!("../data/tools.json");
const POSTS_JSON: &str = include_str!("../data/posts.json");
const LOCATIONS_JSON: &str = include_str!("../data/locations.json");

/// Location shown on the contact map when nothing (or something unknown) is selected.
pub const DEFAULT_LOCATION_ID: &str = "office";

/// Errors raised while loading the bundled tables.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Parse error in {table}: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate id in {table}: {id}")]
    DuplicateId { table: &'static str, id: String },
    #[error("Product {id} has subcategory {subcategory} outside category {category}")]
    SubcategoryMismatch {
        id: String,
        category: String,
        subcategory: &'static str,
    },
    #[error("Default location {0} is missing")]
    MissingDefaultLocation(&'static str),
}

/// Immutable content tables, cheap to clone.
#[derive(Debug, Clone)]
pub struct ContentStore {
    products: Arc<Vec<Product>>,
    straps: Arc<Vec<StrapProduct>>,
    tools: Arc<Vec<ToolProduct>>,
    posts: Arc<Vec<BlogPost>>,
    locations: Arc<Vec<Location>>,
    default_location: Arc<Location>,
}

impl ContentStore {
    /// Parse and validate the bundled tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a table is malformed, holds duplicate ids, pairs a
    /// product with a subcategory of another category, or lacks the default
    /// location.
    pub fn load() -> Result<Self, ContentError> {
        let products: Vec<Product> = parse("products", PRODUCTS_JSON)?;
        let straps: Vec<StrapProduct> = parse("straps", STRAPS_JSON)?;
        let tools: Vec<ToolProduct> = parse("tools", TOOLS_JSON)?;
        let posts: Vec<BlogPost> = parse("posts", POSTS_JSON)?;
        let locations: Vec<Location> = parse("locations", LOCATIONS_JSON)?;

        ensure_unique("products", products.iter().map(|p| p.id.as_str()))?;
        ensure_unique("straps", straps.iter().map(|s| s.id.as_str()))?;
        ensure_unique("tools", tools.iter().map(|t| t.id.as_str()))?;
        ensure_unique("posts", posts.iter().map(|p| p.id.as_str()))?;
        ensure_unique("locations", locations.iter().map(|l| l.id.as_str()))?;

        for product in &products {
            if let Some(sub) = product.subcategory
                && !product.category.has_subcategory(sub)
            {
                return Err(ContentError::SubcategoryMismatch {
                    id: product.id.to_string(),
                    category: product.category.to_string(),
                    subcategory: sub.slug(),
                });
            }
        }

        let default_location = locations
            .iter()
            .find(|l| l.id == *DEFAULT_LOCATION_ID)
            .cloned()
            .ok_or(ContentError::MissingDefaultLocation(DEFAULT_LOCATION_ID))?;

        Ok(Self {
            products: Arc::new(products),
            straps: Arc::new(straps),
            tools: Arc::new(tools),
            posts: Arc::new(posts),
            locations: Arc::new(locations),
            default_location: Arc::new(default_location),
        })
    }

    /// All catalog products, in table order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Strap coils, optionally narrowed to one material.
    pub fn straps(&self, material: Option<StrapMaterial>) -> impl Iterator<Item = &StrapProduct> {
        self.straps
            .iter()
            .filter(move |s| material.is_none_or(|m| s.material == m))
    }

    /// Application tools.
    #[must_use]
    pub fn tools(&self) -> &[ToolProduct] {
        &self.tools
    }

    /// News posts, newest first as authored.
    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// All company sites.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Company sites of one kind, in table order.
    pub fn locations_of(&self, kind: LocationKind) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(move |l| l.kind == kind)
    }

    /// Resolve a map selection; unknown or absent ids fall back to the main office.
    #[must_use]
    pub fn location_or_default(&self, id: Option<&str>) -> &Location {
        id.and_then(|id| self.locations.iter().find(|l| l.id == *id))
            .unwrap_or_else(|| self.default_location.as_ref())
    }
}

fn parse<T: DeserializeOwned>(table: &'static str, json: &str) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { table, source })
}

fn ensure_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
