//! View State Store
//!
//! Mirrors the state container's observables into a Leptos
//! `reactive_stores::Store` for fine-grained reactivity in components.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{AppState, Item};

/// What the components render
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// All items, in list order
    pub items: Vec<Item>,
    /// Every item done (true when empty)
    pub completed: bool,
    /// Items not done yet
    pub remaining: Vec<Item>,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Keep `store` in sync with `state` for the rest of the app's life
pub fn bind_view_store(state: &AppState, store: ViewStore) {
    state.items().subscribe(move |items| {
        *store.items().write() = items.clone();
    });
    state.completed().subscribe(move |completed| {
        *store.completed().write() = *completed;
    });
    state.remaining().subscribe(move |remaining| {
        *store.remaining().write() = remaining.clone();
    });
}

// ========================
// Store Readers
// ========================

pub fn store_items(store: &ViewStore) -> Vec<Item> {
    store.items().get()
}

pub fn store_completed(store: &ViewStore) -> bool {
    store.completed().get()
}

pub fn store_remaining_count(store: &ViewStore) -> usize {
    store.remaining().with(Vec::len)
}
