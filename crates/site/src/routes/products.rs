//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use turanpet_core::models::Product;
use turanpet_core::PriceStyle;

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Product detail display data for templates.
pub struct ProductDetail {
    pub name: String,
    pub category_label: String,
    pub category_href: String,
    pub full_description: String,
    pub image_url: String,
    pub specs: Vec<(String, String)>,
    pub price: Option<String>,
    pub in_stock: bool,
}

impl ProductDetail {
    fn new(product: &Product, ctx: &PageContext) -> Self {
        let language = ctx.language;
        Self {
            name: product.name(language).to_string(),
            category_label: ctx.t(product.category.label_key()).to_string(),
            category_href: format!("/catalog?category={}", product.category.slug()),
            full_description: product.full_description(language).to_string(),
            image_url: product.image_url.clone(),
            specs: product
                .specs(language)
                .iter()
                .map(|row| (row.label.clone(), row.value.clone()))
                .collect(),
            price: product.price_label(language, PriceStyle::Exact),
            in_stock: product.in_stock,
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub ctx: PageContext,
    pub product: ProductDetail,
}

/// Display a product, or send the visitor back to the catalog when the id
/// matches nothing.
#[instrument(skip(state, ctx))]
pub async fn show(
    State(state): State<AppState>,
    ctx: PageContext,
    Path(id): Path<String>,
) -> Response {
    let Some(product) = state.content().product(&id) else {
        tracing::debug!(id = %id, "Unknown product, redirecting to catalog");
        return Redirect::to("/catalog").into_response();
    };

    ProductShowTemplate {
        product: ProductDetail::new(product, &ctx),
        ctx,
    }
    .into_response()
}
