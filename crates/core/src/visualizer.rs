//! Result slot for the logistics image visualizer.
//!
//! Starting a request clears the previous image and error before anything is
//! sent; a request then ends in either a new image or the fixed error text.

use crate::i18n;
use crate::types::{Language, SubmitError};

/// Prepended to every scene description before it is sent.
pub const PROMPT_PREFIX: &str = "Industrial photography, warehouse logistics context: ";

const EXAMPLE_KEYS: [&str; 3] = ["viz.example_1", "viz.example_2", "viz.example_3"];

/// Example scenes offered under the prompt field.
#[must_use]
pub fn example_scenes(language: Language) -> [&'static str; 3] {
    EXAMPLE_KEYS.map(|key| i18n::lookup(language, key))
}

/// The outstanding image request of a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    prompt: String,
    language: Language,
    seq: u64,
}

impl PendingImage {
    /// Prompt to send, prefix included.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Visualizer state: last scene description, loading flag, result or error.
#[derive(Debug, Clone, Default)]
pub struct ImageSlot {
    scene: String,
    result: Option<String>,
    error: Option<String>,
    in_flight: Option<u64>,
    next_seq: u64,
}

impl ImageSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently submitted scene description.
    #[must_use]
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Displayable image reference (`data:` URI) of the last success.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a request for `scene`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Empty`] for a blank description and
    /// [`SubmitError::Busy`] while a request is outstanding; the slot is left
    /// as it was.
    pub fn start(
        &mut self,
        scene: &str,
        language: Language,
    ) -> Result<PendingImage, SubmitError> {
        if scene.trim().is_empty() {
            return Err(SubmitError::Empty);
        }
        if self.in_flight.is_some() {
            return Err(SubmitError::Busy);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        scene.clone_into(&mut self.scene);
        self.result = None;
        self.error = None;

        Ok(PendingImage {
            prompt: format!("{PROMPT_PREFIX}{scene}"),
            language,
            seq,
        })
    }

    /// Show a generated image. Returns `false` if `pending` is stale.
    pub fn succeed(&mut self, pending: &PendingImage, image: String) -> bool {
        if !self.settle(pending) {
            return false;
        }
        self.result = Some(image);
        true
    }

    /// Show the fixed error text. Returns `false` if `pending` is stale.
    pub fn fail(&mut self, pending: &PendingImage) -> bool {
        if !self.settle(pending) {
            return false;
        }
        self.result = None;
        self.error = Some(i18n::lookup(pending.language, "viz.error").to_owned());
        true
    }

    fn settle(&mut self, pending: &PendingImage) -> bool {
        if self.in_flight != Some(pending.seq) {
            return false;
        }
        self.in_flight = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn test_blank_scene_is_rejected() {
        let mut slot = ImageSlot::new();
        assert_eq!(slot.start(" ", Language::En), Err(SubmitError::Empty));
        assert!(!slot.is_loading());
        assert_eq!(slot.scene(), "");
    }

    #[test]
    fn test_prompt_is_prefixed() {
        let mut slot = ImageSlot::new();
        let pending = slot.start("pallet of bricks", Language::En).expect("start");
        assert_eq!(
            pending.prompt(),
            "Industrial photography, warehouse logistics context: pallet of bricks"
        );
        assert!(slot.is_loading());
        assert_eq!(slot.scene(), "pallet of bricks");
    }

    #[test]
    fn test_success_sets_result() {
        let mut slot = ImageSlot::new();
        let pending = slot.start("pallet of bricks", Language::En).expect("start");
        assert!(slot.succeed(&pending, IMAGE.to_string()));
        assert_eq!(slot.result(), Some(IMAGE));
        assert_eq!(slot.error(), None);
        assert!(!slot.is_loading());
    }

    #[test]
    fn test_failure_sets_error_without_result() {
        let mut slot = ImageSlot::new();
        let pending = slot.start("pallet of bricks", Language::Ru).expect("start");
        assert!(slot.fail(&pending));
        assert_eq!(slot.result(), None);
        assert_eq!(slot.error(), Some("Не удалось создать визуализацию."));
        assert!(!slot.is_loading());
    }

    #[test]
    fn test_new_request_clears_previous_image_and_error() {
        let mut slot = ImageSlot::new();
        let first = slot.start("one", Language::En).expect("start");
        slot.succeed(&first, IMAGE.to_string());

        let second = slot.start("two", Language::En).expect("start");
        assert_eq!(slot.result(), None);
        slot.fail(&second);
        assert_eq!(slot.error(), Some("Failed to generate visualization."));

        let _third = slot.start("three", Language::En).expect("start");
        assert_eq!(slot.error(), None);
        assert_eq!(slot.result(), None);
    }

    #[test]
    fn test_in_flight_request_is_exclusive() {
        let mut slot = ImageSlot::new();
        let pending = slot.start("one", Language::En).expect("start");
        assert_eq!(slot.start("two", Language::En), Err(SubmitError::Busy));
        assert_eq!(slot.scene(), "one");

        assert!(slot.succeed(&pending, IMAGE.to_string()));
        assert!(!slot.succeed(&pending, IMAGE.to_string()));
    }

    #[test]
    fn test_example_scenes() {
        assert_eq!(
            example_scenes(Language::En)[1],
            "Forklift moving pallet in large warehouse"
        );
    }
}
