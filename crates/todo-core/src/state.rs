//! Application State Container
//!
//! Single source of truth for the todo list. Holds the item list in an
//! [`Observable`], derives `completed` and `remaining` from it, and writes
//! every new list to the injected [`ItemStorage`].
//!
//! Every command reads the current list, builds a new one and publishes it.
//! Each command publishes exactly once and saves exactly once, even when the
//! target id does not exist.

use tracing::{debug, warn};

use crate::domain::{Item, ItemId};
use crate::error::StateResult;
use crate::id::IdGenerator;
use crate::observable::Observable;
use crate::storage::ItemStorage;

/// Reactive todo state
pub struct AppState {
    items: Observable<Vec<Item>>,
    completed: Observable<bool>,
    remaining: Observable<Vec<Item>>,
    storage: Box<dyn ItemStorage>,
    ids: IdGenerator,
}

fn all_done(items: &[Item]) -> bool {
    items.iter().all(|item| item.done)
}

fn not_done(items: &[Item]) -> Vec<Item> {
    items.iter().filter(|item| !item.done).cloned().collect()
}

impl AppState {
    /// Restore the list from `storage`.
    ///
    /// Missing or unreadable data starts an empty list.
    pub fn new(storage: impl ItemStorage + 'static) -> StateResult<Self> {
        let items = match storage.load() {
            Ok(Some(items)) => {
                debug!(count = items.len(), "restored items from storage");
                items
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "discarding stored items");
                Vec::new()
            }
        };
        Self::build(items, Box::new(storage))
    }

    /// Start from a caller-provided list; storage is only written to.
    pub fn with_items(items: Vec<Item>, storage: impl ItemStorage + 'static) -> StateResult<Self> {
        Self::build(items, Box::new(storage))
    }

    fn build(items: Vec<Item>, storage: Box<dyn ItemStorage>) -> StateResult<Self> {
        let ids = IdGenerator::new();
        ids.seed_from(&items);

        let items = Observable::new(items);
        let completed = items.map(|items: &Vec<Item>| all_done(items));
        let remaining = items.map(|items: &Vec<Item>| not_done(items));

        let state = Self {
            items,
            completed,
            remaining,
            storage,
            ids,
        };
        state.persist()?;
        Ok(state)
    }

    /// Replace the id source (deterministic ids in tests)
    #[must_use]
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        ids.seed_from(&self.items.get());
        self.ids = ids;
        self
    }

    // ========================
    // Observables
    // ========================

    /// Current item list
    pub fn items(&self) -> &Observable<Vec<Item>> {
        &self.items
    }

    /// True when every item is done (also when there are none)
    pub fn completed(&self) -> &Observable<bool> {
        &self.completed
    }

    /// Items not done yet, in list order
    pub fn remaining(&self) -> &Observable<Vec<Item>> {
        &self.remaining
    }

    // ========================
    // Reads
    // ========================

    pub fn snapshot(&self) -> Vec<Item> {
        self.items.get().as_ref().clone()
    }

    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.items.with(|items| items.iter().find(|item| item.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================
    // Commands
    // ========================

    /// Append a new, not done item. The name is taken as is.
    pub fn add_item(&self, name: impl Into<String>) -> StateResult<Item> {
        let item = Item::new(self.ids.next_id(), name);
        let mut items = self.snapshot();
        items.push(item.clone());
        debug!(id = %item.id, "add item");
        self.publish(items)?;
        Ok(item)
    }

    pub fn delete_item(&self, id: ItemId) -> StateResult<()> {
        let items: Vec<Item> = self.items.with(|items| {
            items.iter().filter(|item| item.id != id).cloned().collect()
        });
        debug!(%id, found = items.len() != self.len(), "delete item");
        self.publish(items)
    }

    pub fn toggle_item(&self, id: ItemId) -> StateResult<()> {
        debug!(%id, "toggle item");
        self.replace(id, Item::toggled)
    }

    pub fn set_name(&self, id: ItemId, name: impl Into<String>) -> StateResult<()> {
        let name = name.into();
        debug!(%id, "rename item");
        self.replace(id, |item| item.renamed(name.as_str()))
    }

    /// Mark everything done, or everything not done if it already was.
    pub fn toggle_all(&self) -> StateResult<()> {
        let items: Vec<Item> = self.items.with(|items| {
            let done = !all_done(items);
            items.iter().map(|item| item.with_done(done)).collect()
        });
        debug!(count = items.len(), "toggle all");
        self.publish(items)
    }

    // ========================
    // Internals
    // ========================

    /// Swap the item matching `id` for `f(item)`; other items are kept
    fn replace(&self, id: ItemId, f: impl Fn(&Item) -> Item) -> StateResult<()> {
        let items: Vec<Item> = self.items.with(|items| {
            items
                .iter()
                .map(|item| if item.id == id { f(item) } else { item.clone() })
                .collect()
        });
        self.publish(items)
    }

    fn publish(&self, items: Vec<Item>) -> StateResult<()> {
        self.items.publish(items);
        self.persist()
    }

    fn persist(&self) -> StateResult<()> {
        let items = self.items.get();
        self.storage.save(&items)?;
        Ok(())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("items", &self.items.get())
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn item(id: u64, name: &str, done: bool) -> Item {
        Item::new(ItemId(id), name).with_done(done)
    }

    fn setup(items: Vec<Item>) -> (AppState, MemoryStorage) {
        let storage = MemoryStorage::new();
        let state = AppState::with_items(items, storage.clone()).expect("Failed to build state");
        (state, storage)
    }

    #[test]
    fn test_hydrate_from_storage() {
        let storage = MemoryStorage::with_raw(r#"[{"id":1,"name":"a","done":true}]"#);
        let state = AppState::new(storage).unwrap();
        assert_eq!(state.snapshot(), vec![item(1, "a", true)]);
        assert!(*state.completed().get());
    }

    #[test]
    fn test_hydrate_missing_is_empty() {
        let storage = MemoryStorage::new();
        let state = AppState::new(storage.clone()).unwrap();
        assert!(state.is_empty());
        assert!(*state.completed().get());
        // Initial publish is persisted
        assert_eq!(storage.raw().as_deref(), Some("[]"));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_hydrate_malformed_is_empty() {
        let storage = MemoryStorage::with_raw("not json at all");
        let state = AppState::new(storage.clone()).unwrap();
        assert!(state.is_empty());
        assert_eq!(storage.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_with_items_ignores_storage_content() {
        let storage = MemoryStorage::with_raw(r#"[{"id":9,"name":"old","done":false}]"#);
        let state = AppState::with_items(vec![item(1, "new", false)], storage.clone()).unwrap();
        assert_eq!(state.snapshot(), vec![item(1, "new", false)]);
        assert_eq!(storage.load().unwrap(), Some(vec![item(1, "new", false)]));
    }

    #[test]
    fn test_add_item_appends() {
        let (state, storage) = setup(vec![item(1, "a", true)]);
        let added = state.add_item("b").unwrap();

        assert!(!added.done);
        assert_eq!(added.name, "b");
        assert!(added.id > ItemId(1));
        assert_eq!(state.snapshot(), vec![item(1, "a", true), added.clone()]);
        assert_eq!(state.get(added.id), Some(added));
        assert!(!*state.completed().get());
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_add_item_accepts_empty_and_duplicate_names() {
        let (state, _) = setup(vec![]);
        let a = state.add_item("").unwrap();
        let b = state.add_item("").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_toggle_item() {
        let (state, _) = setup(vec![item(1, "a", false), item(2, "b", false)]);
        state.toggle_item(ItemId(2)).unwrap();
        assert_eq!(state.snapshot(), vec![item(1, "a", false), item(2, "b", true)]);
        assert_eq!(*state.remaining().get(), vec![item(1, "a", false)]);
    }

    #[test]
    fn test_set_name_keeps_done() {
        let (state, _) = setup(vec![item(1, "a", true)]);
        state.set_name(ItemId(1), "renamed").unwrap();
        assert_eq!(state.snapshot(), vec![item(1, "renamed", true)]);
    }

    #[test]
    fn test_unknown_id_is_noop_but_publishes() {
        let (state, storage) = setup(vec![item(1, "a", false)]);
        let before = state.snapshot();

        let emissions = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&emissions);
        state.items().subscribe(move |_| *counter.borrow_mut() += 1);

        state.delete_item(ItemId(99)).unwrap();
        state.toggle_item(ItemId(99)).unwrap();
        state.set_name(ItemId(99), "x").unwrap();

        assert_eq!(state.snapshot(), before);
        // 1 replay + 3 commands
        assert_eq!(*emissions.borrow(), 4);
        assert_eq!(storage.writes(), 4);
    }

    #[test]
    fn test_toggle_all() {
        let (state, _) = setup(vec![item(1, "a", false), item(2, "b", true)]);

        state.toggle_all().unwrap();
        assert!(state.snapshot().iter().all(|i| i.done));
        assert!(*state.completed().get());

        state.toggle_all().unwrap();
        assert!(state.snapshot().iter().all(|i| !i.done));
        assert_eq!(state.remaining().get().len(), 2);
    }

    #[test]
    fn test_toggle_all_on_empty_list() {
        let (state, storage) = setup(vec![]);
        state.toggle_all().unwrap();
        assert!(state.is_empty());
        assert!(*state.completed().get());
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_derived_views_emit_on_change() {
        let (state, _) = setup(vec![item(1, "a", false)]);

        let completed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&completed);
        state.completed().subscribe(move |c| sink.borrow_mut().push(*c));

        state.toggle_item(ItemId(1)).unwrap();
        state.toggle_item(ItemId(1)).unwrap();
        assert_eq!(*completed.borrow(), vec![false, true, false]);
    }

    #[test]
    fn test_subscriber_can_issue_command() {
        let state = Rc::new(setup(vec![]).0);
        let weak = Rc::downgrade(&state);
        state.items().subscribe(move |items| {
            // Mark every freshly added item done, once
            if let (Some(state), Some(last)) = (weak.upgrade(), items.last()) {
                if !last.done {
                    state.toggle_item(last.id).unwrap();
                }
            }
        });

        let added = state.add_item("x").unwrap();
        assert_eq!(state.get(added.id).map(|i| i.done), Some(true));
    }

    #[test]
    fn test_write_failure_is_reported_after_publish() {
        let (state, storage) = setup(vec![]);
        storage.fail_writes(true);

        let err = state.add_item("a").unwrap_err();
        assert!(matches!(err, StateError::Persist(_)));
        // In-memory list moved on; storage kept the last good value
        assert_eq!(state.len(), 1);
        assert_eq!(storage.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_construction_fails_when_storage_rejects_writes() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        assert!(AppState::new(storage).is_err());
    }

    #[test]
    fn test_custom_id_generator() {
        let (state, _) = setup(vec![item(5, "a", false)]);
        let state = state.with_id_generator(IdGenerator::with_clock(|| 3));
        assert_eq!(state.add_item("b").unwrap().id, ItemId(6));
        assert_eq!(state.add_item("c").unwrap().id, ItemId(7));
    }
}
