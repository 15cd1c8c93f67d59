//! News route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Blog post teaser for templates.
pub struct PostView {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub image_url: String,
}

/// Blog listing template.
#[derive(Template, WebTemplate)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub ctx: PageContext,
    pub posts: Vec<PostView>,
}

/// Display the news listing.
#[instrument(skip(state, ctx))]
pub async fn index(State(state): State<AppState>, ctx: PageContext) -> impl IntoResponse {
    let language = ctx.language;
    let posts = state
        .content()
        .posts()
        .iter()
        .map(|post| PostView {
            title: post.title(language).to_string(),
            date: post.date(language).to_string(),
            excerpt: post.excerpt(language).to_string(),
            image_url: post.image_url.clone(),
        })
        .collect();

    BlogTemplate { ctx, posts }
}
