//! Fetch-state tracking for record collections
//!
//! Each dashboard view owns one store per collection it fetches. The
//! store holds the loading/error/data state explicitly and applies the
//! optimistic local updates performed after successful create, update
//! and delete calls. No interior mutability: callers own their store and
//! mutate it directly.

use crate::Record;

/// Lifecycle of one fetched value
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet
    Idle,
    /// Request in flight
    Loading,
    /// Request finished with data
    Ready(T),
    /// Request failed with an error message
    Failed(String),
}

impl<T> FetchState<T> {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Whether data has arrived
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    /// The loaded value, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A fetched collection of records with optimistic local updates
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStore<T> {
    state: FetchState<Vec<T>>,
}

impl<T: Record> CollectionStore<T> {
    /// Create an empty store in the idle state
    pub fn new() -> Self {
        CollectionStore {
            state: FetchState::Idle,
        }
    }

    /// Current fetch state
    pub fn state(&self) -> &FetchState<Vec<T>> {
        &self.state
    }

    /// Loaded records, or an empty slice while nothing is loaded
    ///
    /// Views render from this directly, so a loading or failed store
    /// shows an empty list rather than stale data.
    pub fn items(&self) -> &[T] {
        match &self.state {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Enter the loading state, dropping any previous data or error
    pub fn begin_load(&mut self) {
        self.state = FetchState::Loading;
    }

    /// Store freshly fetched records
    pub fn load_succeeded(&mut self, items: Vec<T>) {
        self.state = FetchState::Ready(items);
    }

    /// Record a fetch failure
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.state = FetchState::Failed(message.into());
    }

    /// Replace the record with the same id, or append it
    ///
    /// Returns whether the store accepted the record; stores without
    /// loaded data ignore the call.
    pub fn upsert(&mut self, item: T) -> bool {
        let items = match &mut self.state {
            FetchState::Ready(items) => items,
            _ => return false,
        };

        if let Some(existing) = items.iter_mut().find(|i| i.id() == item.id()) {
            *existing = item;
        } else {
            items.push(item);
        }
        true
    }

    /// Remove the record with the given id
    ///
    /// Returns whether a record was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let items = match &mut self.state {
            FetchState::Ready(items) => items,
            _ => return false,
        };

        let before = items.len();
        items.retain(|i| i.id() != id);
        items.len() < before
    }

    /// Reset the store to the idle state
    pub fn clear(&mut self) {
        self.state = FetchState::Idle;
    }
}

impl<T: Record> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        value: i32,
    }

    impl Item {
        fn new(id: &str, value: i32) -> Self {
            Item {
                id: id.to_string(),
                value,
            }
        }
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_load_lifecycle() {
        let mut store: CollectionStore<Item> = CollectionStore::new();
        assert_eq!(*store.state(), FetchState::Idle);
        assert!(store.items().is_empty());

        store.begin_load();
        assert!(store.state().is_loading());
        assert!(store.items().is_empty());

        store.load_succeeded(vec![Item::new("a", 1), Item::new("b", 2)]);
        assert!(store.state().is_ready());
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_failed_load_keeps_message() {
        let mut store: CollectionStore<Item> = CollectionStore::new();
        store.begin_load();
        store.load_failed("request timed out");

        assert!(!store.state().is_ready());
        assert_eq!(store.state().error(), Some("request timed out"));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_reload_drops_previous_error() {
        let mut store: CollectionStore<Item> = CollectionStore::new();
        store.load_failed("request timed out");

        store.begin_load();
        assert_eq!(store.state().error(), None);
        assert!(store.state().is_loading());
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut store: CollectionStore<Item> = CollectionStore::new();
        store.load_succeeded(vec![Item::new("a", 1), Item::new("b", 2)]);

        assert!(store.upsert(Item::new("a", 10)));
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[0].value, 10);
    }

    #[test]
    fn test_upsert_appends_new_ids() {
        let mut store: CollectionStore<Item> = CollectionStore::new();
        store.load_succeeded(vec![Item::new("a", 1)]);

        assert!(store.upsert(Item::new("c", 3)));
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[1].id, "c");
    }

    #[test]
    fn test_mutations_ignored_until_loaded() {
        let mut store: CollectionStore<Item> = CollectionStore::new();

        assert!(!store.upsert(Item::new("a", 1)));
        assert!(!store.remove("a"));

        store.begin_load();
        assert!(!store.upsert(Item::new("a", 1)));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut store: CollectionStore<Item> = CollectionStore::new();
        store.load_succeeded(vec![Item::new("a", 1), Item::new("b", 2)]);

        assert!(store.remove("a"));
        assert_eq!(store.items().len(), 1);
        assert!(!store.remove("a"));
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut store: CollectionStore<Item> = CollectionStore::new();
        store.load_succeeded(vec![Item::new("a", 1)]);

        store.clear();
        assert_eq!(*store.state(), FetchState::Idle);
        assert!(store.items().is_empty());
    }
}
