//! In-process registry of per-visitor widget state.
//!
//! The advisor transcript and the visualizer slot live here, keyed by an id
//! stored in the visitor's session. Entries are evicted after a period of
//! inactivity, so an abandoned widget simply disappears.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::Mutex;
use uuid::Uuid;

use turanpet_core::advisor::AdvisorChat;
use turanpet_core::visualizer::ImageSlot;

/// Idle lifetime of a widget before it is evicted.
pub const WIDGET_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Upper bound, in bytes of widget content, on live widgets of one kind.
pub const WIDGET_MEMORY_BUDGET: u64 = 256 * 1024 * 1024;

/// A handle to one widget's state. Lock it only for quick state transitions,
/// never across a call to the model.
pub type SharedWidget<T> = Arc<Mutex<T>>;

/// Approximate bytes held by a widget, counted against the store budget.
pub trait Weighted {
    fn weight(&self) -> u32;
}

impl Weighted for AdvisorChat {
    fn weight(&self) -> u32 {
        saturate(self.messages().iter().map(|m| m.text.len()).sum())
    }
}

impl Weighted for ImageSlot {
    fn weight(&self) -> u32 {
        let result = self.result().map_or(0, str::len);
        saturate(self.scene().len() + result)
    }
}

fn saturate(bytes: usize) -> u32 {
    u32::try_from(bytes).unwrap_or(u32::MAX)
}

/// Registry of widgets of one kind.
pub struct WidgetStore<T> {
    cache: Cache<Uuid, SharedWidget<T>>,
}

impl<T: Weighted + Send + Sync + 'static> WidgetStore<T> {
    /// Create a store with the default budget and idle timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(WIDGET_MEMORY_BUDGET, WIDGET_IDLE_TIMEOUT)
    }

    #[must_use]
    pub fn with_limits(budget_bytes: u64, idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(budget_bytes)
            // A widget locked mid-transition counts as minimal until its next refresh
            .weigher(|_id: &Uuid, widget: &SharedWidget<T>| {
                widget.try_lock().map_or(1, |w| w.weight().max(1))
            })
            .time_to_idle(idle)
            .build();
        Self { cache }
    }

    /// Register a new widget and return its id.
    pub async fn insert(&self, widget: T) -> (Uuid, SharedWidget<T>) {
        let id = Uuid::new_v4();
        let shared = Arc::new(Mutex::new(widget));
        self.cache.insert(id, Arc::clone(&shared)).await;
        (id, shared)
    }

    pub async fn get(&self, id: Uuid) -> Option<SharedWidget<T>> {
        self.cache.get(&id).await
    }

    /// Re-weigh a widget after its content changed.
    ///
    /// The cache weighs entries only when they are stored, so call this once
    /// a model reply has landed and the widget lock is released.
    pub async fn refresh_weight(&self, id: Uuid) {
        if let Some(widget) = self.cache.get(&id).await {
            self.cache.insert(id, widget).await;
        }
    }

    /// Drop a widget. Holders of its handle keep a detached copy.
    pub async fn remove(&self, id: Uuid) -> Option<SharedWidget<T>> {
        self.cache.remove(&id).await
    }
}

impl<T: Weighted + Send + Sync + 'static> Default for WidgetStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use turanpet_core::Language;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Note(String);

    impl Weighted for Note {
        fn weight(&self) -> u32 {
            saturate(self.0.len())
        }
    }

    fn note(text: &str) -> Note {
        Note(text.to_string())
    }

    #[tokio::test]
    async fn test_insert_then_get_shares_state() {
        let store = WidgetStore::new();
        let (id, handle) = store.insert(note("greeting")).await;

        handle.lock().await.0.push_str(" question");

        let fetched = store.get(id).await.expect("widget");
        assert_eq!(*fetched.lock().await, note("greeting question"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_absent() {
        let store: WidgetStore<Note> = WidgetStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_detaches_widget() {
        let store = WidgetStore::new();
        let (id, handle) = store.insert(note("a")).await;

        assert!(store.remove(id).await.is_some());
        assert!(store.get(id).await.is_none());

        handle.lock().await.0 = "b".to_string();
        assert_eq!(*handle.lock().await, note("b"));
    }

    #[tokio::test]
    async fn test_refresh_weight_tracks_content() {
        let store = WidgetStore::new();
        let (id, handle) = store.insert(note("hi")).await;
        store.cache.run_pending_tasks().await;
        assert_eq!(store.cache.weighted_size(), 2);

        handle.lock().await.0 = "x".repeat(4096);
        store.refresh_weight(id).await;
        store.cache.run_pending_tasks().await;

        assert_eq!(store.cache.weighted_size(), 4096);
    }

    #[tokio::test]
    async fn test_oversized_widget_is_evicted() {
        let store = WidgetStore::with_limits(1024, WIDGET_IDLE_TIMEOUT);
        let (id, handle) = store.insert(note("small")).await;

        handle.lock().await.0 = "x".repeat(2048);
        store.refresh_weight(id).await;
        store.cache.run_pending_tasks().await;

        assert!(store.get(id).await.is_none());
    }

    #[test]
    fn test_image_slot_weighs_its_image() {
        let mut slot = ImageSlot::new();
        let empty = slot.weight();

        let pending = slot.start("pallet", Language::En).expect("start");
        assert!(slot.succeed(&pending, "A".repeat(1 << 20)));

        assert_eq!(slot.weight(), empty + 6 + (1 << 20));
    }

    #[test]
    fn test_chat_weighs_its_transcript() {
        let mut chat = AdvisorChat::open(Language::En);
        let greeting = chat.weight();
        assert!(greeting > 0);

        let pending = chat.submit("PET?", Language::En).expect("submit");
        assert!(chat.complete(&pending, Some("Yes.")));

        assert_eq!(chat.weight(), greeting + 8);
    }
}
