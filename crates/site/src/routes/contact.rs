//! Contact page route handler.
//!
//! Lists the company sites grouped by kind and embeds a map of the selected
//! one. No selection, or an unknown one, shows the sales office.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use turanpet_core::Language;
use turanpet_core::models::{Location, LocationKind};

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Contact page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    pub location: Option<String>,
}

/// A selectable company site.
pub struct LocationView {
    pub href: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub selected: bool,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
    pub headquarters: Vec<LocationView>,
    pub warehouses: Vec<LocationView>,
    pub selected_name: String,
    pub map_url: String,
}

/// Display the contact page.
#[instrument(skip(state, ctx))]
pub async fn show(
    State(state): State<AppState>,
    ctx: PageContext,
    Query(query): Query<ContactQuery>,
) -> impl IntoResponse {
    let content = state.content();
    let language = ctx.language;
    let selected = content.location_or_default(query.location.as_deref());

    let views = |kind: LocationKind| -> Vec<LocationView> {
        content
            .locations_of(kind)
            .map(|location| location_view(location, selected, language))
            .collect()
    };

    ContactTemplate {
        headquarters: views(LocationKind::Hq),
        warehouses: views(LocationKind::Warehouse),
        selected_name: selected.name(language).to_string(),
        map_url: selected.map_url(language),
        ctx,
    }
}

fn location_view(location: &Location, selected: &Location, language: Language) -> LocationView {
    LocationView {
        href: format!("/contact?location={}#map", location.id),
        name: location.name(language).to_string(),
        city: location.city(language).to_string(),
        address: location.address(language).to_string(),
        selected: location.id == selected.id,
    }
}
