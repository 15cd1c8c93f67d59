//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;
use crate::routes::catalog::ProductCard;
use crate::state::AppState;

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub featured: Vec<ProductCard>,
}

/// Display the home page.
#[instrument(skip(state, ctx))]
pub async fn home(State(state): State<AppState>, ctx: PageContext) -> impl IntoResponse {
    let featured = state
        .content()
        .products()
        .iter()
        .filter(|p| p.in_stock)
        .take(FEATURED_COUNT)
        .map(|p| ProductCard::new(p, ctx.language))
        .collect();

    HomeTemplate { ctx, featured }
}
