//! Scripted [`GenerativeModel`] for service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

use crate::gemini::{GeminiError, GenerativeModel, InlineData};

enum Behavior {
    Reply(Option<String>),
    Fail,
    Image(InlineData),
    NoImage,
}

pub struct MockModel {
    behavior: Behavior,
    gated: bool,
    called: Notify,
    gate: Notify,
    text_calls: AtomicUsize,
    image_calls: AtomicUsize,
    last_text: Mutex<Option<(String, String)>>,
    last_image: Mutex<Option<String>>,
}

impl MockModel {
    fn new(behavior: Behavior, gated: bool) -> Self {
        Self {
            behavior,
            gated,
            called: Notify::new(),
            gate: Notify::new(),
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
            last_image: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Behavior::Reply(Some(text.to_string())), false)
    }

    pub fn silent() -> Self {
        Self::new(Behavior::Reply(None), false)
    }

    pub fn failing() -> Self {
        Self::new(Behavior::Fail, false)
    }

    /// Replies with `text` only after [`MockModel::release`].
    pub fn gated(text: &str) -> Self {
        Self::new(Behavior::Reply(Some(text.to_string())), true)
    }

    pub fn image(mime_type: &str, data: &str) -> Self {
        Self::new(
            Behavior::Image(InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
            false,
        )
    }

    pub fn no_image() -> Self {
        Self::new(Behavior::NoImage, false)
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    pub fn last_text_request(&self) -> Option<(String, String)> {
        self.last_text.lock().ok()?.clone()
    }

    pub fn last_image_prompt(&self) -> Option<String> {
        self.last_image.lock().ok()?.clone()
    }

    pub async fn wait_until_called(&self) {
        self.called.notified().await;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    async fn enter(&self) {
        self.called.notify_one();
        if self.gated {
            self.gate.notified().await;
        }
    }

    fn failure() -> GeminiError {
        GeminiError::Api {
            code: 503,
            status: "UNAVAILABLE".to_string(),
            message: "The model is overloaded.".to_string(),
        }
    }
}

impl GenerativeModel for MockModel {
    async fn generate_text(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<Option<String>, GeminiError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_text.lock() {
            *last = Some((prompt.to_string(), system_instruction.to_string()));
        }
        self.enter().await;

        match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.clone()),
            _ => Err(Self::failure()),
        }
    }

    async fn generate_image(&self, prompt: &str) -> Result<InlineData, GeminiError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_image.lock() {
            *last = Some(prompt.to_string());
        }
        self.enter().await;

        match &self.behavior {
            Behavior::Image(inline) => Ok(inline.clone()),
            Behavior::NoImage => Err(GeminiError::NoImage),
            _ => Err(Self::failure()),
        }
    }
}
