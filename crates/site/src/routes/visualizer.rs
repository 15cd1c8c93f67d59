//! Logistics visualizer route handlers.
//!
//! The widget lives on the production page. A submission generates the
//! image and redirects back there, where the slot is read for display.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use turanpet_core::Language;
use turanpet_core::visualizer::{ImageSlot, example_scenes};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::session::{self, keys};
use crate::services::{SharedWidget, request_image};
use crate::state::AppState;

/// Where the widget is rendered.
const VISUALIZER_PAGE: &str = "/production#visualizer";

/// An example scene link that prefills the prompt.
pub struct ExampleScene {
    pub text: &'static str,
    pub href: String,
}

/// Visualizer state for the production template.
pub struct VisualizerView {
    pub scene: String,
    pub result: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub examples: Vec<ExampleScene>,
}

impl VisualizerView {
    /// Read the visitor's slot; `prefill` replaces the last submitted scene in
    /// the prompt field.
    pub async fn load(
        state: &AppState,
        session: &Session,
        language: Language,
        prefill: Option<String>,
    ) -> Self {
        let slot = match session::widget_id(session, keys::VISUALIZER_WIDGET).await {
            Some(id) => state.visualizers().get(id).await,
            None => None,
        };

        let mut view = Self {
            scene: String::new(),
            result: None,
            error: None,
            loading: false,
            examples: example_links(language),
        };

        if let Some(slot) = slot {
            let slot = slot.lock().await;
            slot.scene().clone_into(&mut view.scene);
            view.result = slot.result().map(str::to_string);
            view.error = slot.error().map(str::to_string);
            view.loading = slot.is_loading();
        }

        if let Some(prefill) = prefill.filter(|s| !s.trim().is_empty()) {
            view.scene = prefill;
        }

        view
    }
}

fn example_links(language: Language) -> Vec<ExampleScene> {
    example_scenes(language)
        .into_iter()
        .map(|text| ExampleScene {
            text,
            href: format!(
                "/production?scene={}#visualizer",
                url::form_urlencoded::byte_serialize(text.as_bytes()).collect::<String>()
            ),
        })
        .collect()
}

/// Visualizer form data.
#[derive(Debug, Deserialize)]
pub struct VisualizerForm {
    #[serde(default)]
    pub scene: String,
}

/// Generate an image for the submitted scene.
///
/// POST /visualizer
///
/// A blank scene or a slot that is still busy is ignored. Generation runs on
/// its own task so a dropped connection cannot leave the slot loading.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
#[instrument(skip(state, session, form), fields(scene_len = form.scene.len()))]
pub async fn generate(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<VisualizerForm>,
) -> Result<Redirect> {
    let language = session::language(&session).await;
    let (id, slot) = visitor_slot(&state, &session).await?;

    add_breadcrumb("visualizer", "Scene submitted", language);

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        request_image(task_state.gemini(), &slot, &form.scene, language).await
    });

    match task.await {
        Ok(Ok(())) => {}
        Ok(Err(reason)) => tracing::debug!(%reason, "Visualizer submission ignored"),
        Err(e) => return Err(AppError::Internal(format!("visualizer task failed: {e}"))),
    }
    state.visualizers().refresh_weight(id).await;

    Ok(Redirect::to(VISUALIZER_PAGE))
}

/// The visitor's slot and its id, created on first use.
async fn visitor_slot(
    state: &AppState,
    session: &Session,
) -> Result<(Uuid, SharedWidget<ImageSlot>)> {
    if let Some(id) = session::widget_id(session, keys::VISUALIZER_WIDGET).await
        && let Some(slot) = state.visualizers().get(id).await
    {
        return Ok((id, slot));
    }

    let (id, slot) = state.visualizers().insert(ImageSlot::new()).await;
    session::set_widget_id(session, keys::VISUALIZER_WIDGET, id).await?;
    Ok((id, slot))
}
