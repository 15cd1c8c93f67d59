//! Static company pages: production and about.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;
use crate::routes::visualizer::VisualizerView;
use crate::state::AppState;

/// Production process steps as (title, description) keys.
const PRODUCTION_STEPS: [(&str, &str); 4] = [
    ("prod.step1", "prod.step1_desc"),
    ("prod.step2", "prod.step2_desc"),
    ("prod.step3", "prod.step3_desc"),
    ("prod.step4", "prod.step4_desc"),
];

const LAB_TESTS: [&str; 4] = [
    "prod.lab_test1",
    "prod.lab_test2",
    "prod.lab_test3",
    "prod.lab_test4",
];

/// Company values as (title, description) keys.
const VALUES: [(&str, &str); 3] = [
    ("about.value1", "about.value1_desc"),
    ("about.value2", "about.value2_desc"),
    ("about.value3", "about.value3_desc"),
];

/// A numbered step or value card.
pub struct Card {
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
}

fn cards(ctx: &PageContext, keys: &[(&'static str, &'static str)]) -> Vec<Card> {
    keys.iter()
        .enumerate()
        .map(|(i, &(title, description))| Card {
            number: i + 1,
            title: ctx.t(title),
            description: ctx.t(description),
        })
        .collect()
}

/// Production page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductionQuery {
    /// Prefills the visualizer prompt (example scene links).
    pub scene: Option<String>,
}

/// Production page template.
#[derive(Template, WebTemplate)]
#[template(path = "production.html")]
pub struct ProductionTemplate {
    pub ctx: PageContext,
    pub steps: Vec<Card>,
    pub lab_tests: Vec<&'static str>,
    pub visualizer: VisualizerView,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
    pub values: Vec<Card>,
}

/// Display the production page with the logistics visualizer.
#[instrument(skip(state, session, ctx, query))]
pub async fn production(
    State(state): State<AppState>,
    session: Session,
    ctx: PageContext,
    Query(query): Query<ProductionQuery>,
) -> impl IntoResponse {
    let visualizer = VisualizerView::load(&state, &session, ctx.language, query.scene).await;

    ProductionTemplate {
        steps: cards(&ctx, &PRODUCTION_STEPS),
        lab_tests: LAB_TESTS.iter().map(|&key| ctx.t(key)).collect(),
        visualizer,
        ctx,
    }
}

/// Display the about page.
#[instrument(skip(ctx))]
pub async fn about(ctx: PageContext) -> impl IntoResponse {
    AboutTemplate {
        values: cards(&ctx, &VALUES),
        ctx,
    }
}
