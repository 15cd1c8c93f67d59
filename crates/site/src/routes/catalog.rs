//! Catalog route handlers: the filtered product catalog plus the strap
//! inventory and tool shop listings.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use turanpet_core::catalog::CatalogSelection;
use turanpet_core::models::{Product, StrapMaterial, StrapProduct, ToolProduct};
use turanpet_core::{CategoryFilter, Language, PriceStyle, ProductCategory, SubcategoryFilter};

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub specs: Vec<(String, String)>,
    pub price: Option<String>,
}

impl ProductCard {
    /// Card for a catalog listing in `language`.
    #[must_use]
    pub fn new(product: &Product, language: Language) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name(language).to_string(),
            description: product.description(language).to_string(),
            image_url: product.image_url.clone(),
            specs: product
                .card_specs(language)
                .iter()
                .map(|row| (row.label.clone(), row.value.clone()))
                .collect(),
            price: product.price_label(language, PriceStyle::Starting),
        }
    }
}

/// A filter button.
#[derive(Clone)]
pub struct FilterLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// Catalog filter query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// Strap inventory query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct StrapQuery {
    #[serde(rename = "type")]
    pub material: Option<String>,
}

/// Product catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub ctx: PageContext,
    pub categories: Vec<FilterLink>,
    pub subcategories: Vec<FilterLink>,
    pub products: Vec<ProductCard>,
}

/// Strap card display data.
#[derive(Clone)]
pub struct StrapCard {
    pub name: String,
    pub material: &'static str,
    pub width: String,
    pub thickness: String,
    pub break_strength: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
}

impl StrapCard {
    fn new(strap: &StrapProduct, language: Language) -> Self {
        Self {
            name: strap.name.clone(),
            material: strap.material.as_str(),
            width: strap.width.clone(),
            thickness: strap.thickness.clone(),
            break_strength: strap.break_strength.clone(),
            description: strap.description.clone(),
            image_url: strap.image_url.clone(),
            price: strap.price.display(language, PriceStyle::Exact),
        }
    }
}

/// Strap inventory page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/straps.html")]
pub struct StrapsTemplate {
    pub ctx: PageContext,
    pub materials: Vec<FilterLink>,
    pub straps: Vec<StrapCard>,
}

/// Tool card display data.
#[derive(Clone)]
pub struct ToolCard {
    pub name: String,
    pub category: String,
    pub rating: String,
    pub image_url: String,
    pub price: String,
}

impl ToolCard {
    fn new(tool: &ToolProduct, language: Language) -> Self {
        Self {
            name: tool.name.clone(),
            category: tool.category.clone(),
            rating: format!("{:.1}", tool.rating),
            image_url: tool.image_url.clone(),
            price: tool.price.display(language, PriceStyle::Exact),
        }
    }
}

/// Tool shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/tools.html")]
pub struct ToolsTemplate {
    pub ctx: PageContext,
    pub tools: Vec<ToolCard>,
}

/// Display the product catalog, filtered by category and subcategory.
#[instrument(skip(state, ctx))]
pub async fn index(
    State(state): State<AppState>,
    ctx: PageContext,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let selection =
        CatalogSelection::from_query(query.category.as_deref(), query.subcategory.as_deref());

    let products = selection
        .apply(state.content().products())
        .map(|p| ProductCard::new(p, ctx.language))
        .collect();

    CatalogTemplate {
        categories: category_links(&ctx, selection),
        subcategories: subcategory_links(&ctx, selection),
        products,
        ctx,
    }
}

/// Display the strap inventory, optionally narrowed to one material.
#[instrument(skip(state, ctx))]
pub async fn straps(
    State(state): State<AppState>,
    ctx: PageContext,
    Query(query): Query<StrapQuery>,
) -> impl IntoResponse {
    let material = query.material.as_deref().and_then(StrapMaterial::from_tag);

    let mut materials = vec![FilterLink {
        href: "/catalog/straps".to_string(),
        label: ctx.t("straps.all_materials").to_string(),
        active: material.is_none(),
    }];
    materials.extend(StrapMaterial::ALL.into_iter().map(|m| FilterLink {
        href: format!("/catalog/straps?type={}", m.as_str()),
        label: m.as_str().to_string(),
        active: material == Some(m),
    }));

    let straps = state
        .content()
        .straps(material)
        .map(|s| StrapCard::new(s, ctx.language))
        .collect();

    StrapsTemplate {
        ctx,
        materials,
        straps,
    }
}

/// Display the tool shop.
#[instrument(skip(state, ctx))]
pub async fn tools(State(state): State<AppState>, ctx: PageContext) -> impl IntoResponse {
    let tools = state
        .content()
        .tools()
        .iter()
        .map(|t| ToolCard::new(t, ctx.language))
        .collect();

    ToolsTemplate { ctx, tools }
}

/// Category tabs; "All" first.
fn category_links(ctx: &PageContext, selection: CatalogSelection) -> Vec<FilterLink> {
    let mut links = vec![FilterLink {
        href: "/catalog".to_string(),
        label: ctx.t("catalog.all").to_string(),
        active: selection.category() == CategoryFilter::All,
    }];
    links.extend(ProductCategory::ALL.into_iter().map(|category| FilterLink {
        href: format!("/catalog?category={}", category.slug()),
        label: ctx.t(category.label_key()).to_string(),
        active: selection.category() == CategoryFilter::Only(category),
    }));
    links
}

/// Subcategory buttons for the active category; empty when none applies.
fn subcategory_links(ctx: &PageContext, selection: CatalogSelection) -> Vec<FilterLink> {
    let Some(category) = selection.active_category() else {
        return Vec::new();
    };
    let available = selection.available_subcategories();
    if available.is_empty() {
        return Vec::new();
    }

    let base = format!("/catalog?category={}", category.slug());
    let mut links = vec![FilterLink {
        href: base.clone(),
        label: ctx.t("subcat.all").to_string(),
        active: selection.subcategory() == SubcategoryFilter::All,
    }];
    links.extend(available.iter().map(|&sub| FilterLink {
        href: format!("{base}&subcategory={}", sub.slug()),
        label: ctx.t(sub.label_key()).to_string(),
        active: selection.subcategory() == SubcategoryFilter::Only(sub),
    }));
    links
}
