//! Logistics visualizer proxy.

use tokio::sync::Mutex;
use tracing::instrument;

use turanpet_core::visualizer::ImageSlot;
use turanpet_core::{Language, SubmitError};

use crate::gemini::GenerativeModel;

/// Generate an image for `scene` and store it in `slot`.
///
/// The slot is cleared when the request starts. A transport failure, a
/// response without an inline image and an undecodable payload all end in the
/// slot's fixed error message.
///
/// # Errors
///
/// Returns the [`SubmitError`] if the slot refused the request; the model is
/// not contacted in that case.
#[instrument(skip(model, slot, scene), fields(scene_len = scene.len()))]
pub async fn request_image<M: GenerativeModel>(
    model: &M,
    slot: &Mutex<ImageSlot>,
    scene: &str,
    language: Language,
) -> Result<(), SubmitError> {
    let pending = slot.lock().await.start(scene, language)?;

    let result = model
        .generate_image(pending.prompt())
        .await
        .and_then(|inline| inline.to_data_uri());

    let mut slot = slot.lock().await;
    let applied = match result {
        Ok(image) => slot.succeed(&pending, image),
        Err(e) => {
            tracing::error!(error = %e, "Visualization request failed");
            slot.fail(&pending)
        }
    };

    if !applied {
        tracing::debug!("Visualizer slot moved on before the image arrived, result discarded");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::testing::MockModel;

    #[tokio::test]
    async fn test_blank_scene_never_reaches_the_model() {
        let model = MockModel::image("image/png", "aGVsbG8=");
        let slot = Mutex::new(ImageSlot::new());

        let result = request_image(&model, &slot, "  ", Language::En).await;

        assert_eq!(result, Err(SubmitError::Empty));
        assert_eq!(model.image_calls(), 0);
    }

    #[tokio::test]
    async fn test_inline_image_becomes_data_uri() {
        let model = MockModel::image("image/png", "iVBORw0KGgo=");
        let slot = Mutex::new(ImageSlot::new());

        request_image(&model, &slot, "pallet of bricks", Language::En)
            .await
            .unwrap();

        assert_eq!(
            model.last_image_prompt().as_deref(),
            Some("Industrial photography, warehouse logistics context: pallet of bricks")
        );
        let slot = slot.lock().await;
        assert_eq!(slot.result(), Some("data:image/png;base64,iVBORw0KGgo="));
        assert_eq!(slot.error(), None);
        assert!(!slot.is_loading());
    }

    #[tokio::test]
    async fn test_missing_image_sets_error() {
        let model = MockModel::no_image();
        let slot = Mutex::new(ImageSlot::new());

        request_image(&model, &slot, "pallet of bricks", Language::En)
            .await
            .unwrap();

        let slot = slot.lock().await;
        assert_eq!(slot.result(), None);
        assert_eq!(slot.error(), Some("Failed to generate visualization."));
    }

    #[tokio::test]
    async fn test_undecodable_payload_sets_error() {
        let model = MockModel::image("image/png", "%%% not base64 %%%");
        let slot = Mutex::new(ImageSlot::new());

        request_image(&model, &slot, "pallet of bricks", Language::Ru)
            .await
            .unwrap();

        let slot = slot.lock().await;
        assert_eq!(slot.result(), None);
        assert_eq!(slot.error(), Some("Не удалось создать визуализацию."));
    }

    #[tokio::test]
    async fn test_service_failure_sets_error() {
        let model = MockModel::failing();
        let slot = Mutex::new(ImageSlot::new());

        request_image(&model, &slot, "forklift", Language::En)
            .await
            .unwrap();

        let slot = slot.lock().await;
        assert!(slot.error().is_some());
        assert!(!slot.is_loading());
    }
}
