//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalog                - Product catalog (?category=&subcategory=)
//! GET  /catalog/straps         - Strap inventory (?type=PET|PP|Steel|Cord)
//! GET  /catalog/tools          - Application tool shop
//! GET  /products/{id}          - Product detail (unknown id redirects to /catalog)
//!
//! # Company
//! GET  /production             - Production process and visualizer (?scene=)
//! GET  /about                  - Company story and values
//! GET  /contact                - Contacts and site map (?location=)
//! GET  /blog                   - News
//!
//! # Visitor actions (post/redirect/get)
//! POST /language               - Switch the page language
//! POST /assistant/open         - Open the packaging advisor
//! POST /assistant/close        - Dismiss the packaging advisor
//! POST /assistant/messages     - Ask the advisor (rate limited)
//! POST /visualizer             - Generate a logistics scene (rate limited)
//!
//! *                            - Redirect to /
//! ```

pub mod assistant;
pub mod blog;
pub mod catalog;
pub mod contact;
pub mod home;
pub mod language;
pub mod pages;
pub mod products;
pub mod visualizer;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::middleware::ai_rate_limiter;
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/straps", get(catalog::straps))
        .route("/tools", get(catalog::tools))
}

/// Create the advisor routes router.
///
/// Only the message route reaches the model, so only it is rate limited.
pub fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(assistant::send))
        .layer(ai_rate_limiter())
        .route("/open", post(assistant::open))
        .route("/close", post(assistant::close))
}

/// Create the visualizer routes router.
pub fn visualizer_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(visualizer::generate))
        .layer(ai_rate_limiter())
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .nest("/catalog", catalog_routes())
        .route("/products/{id}", get(products::show))
        // Company pages
        .route("/production", get(pages::production))
        .route("/about", get(pages::about))
        .route("/contact", get(contact::show))
        .route("/blog", get(blog::index))
        // Visitor actions
        .route("/language", post(language::switch))
        .nest("/assistant", assistant_routes())
        .nest("/visualizer", visualizer_routes())
        // Unknown paths go home
        .fallback(|| async { Redirect::to("/") })
}
