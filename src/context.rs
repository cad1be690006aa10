//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{AppState, StateResult};

use crate::filter::FilterMode;
use crate::store::ViewStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// The state container (single-threaded, so local storage)
    state: StoredValue<AppState, LocalStorage>,
    /// Render-side mirror of the container's observables
    pub store: ViewStore,
    /// Current list filter - read
    pub filter: ReadSignal<FilterMode>,
    /// Current list filter - write
    set_filter: WriteSignal<FilterMode>,
}

impl TodoContext {
    pub fn new(
        state: StoredValue<AppState, LocalStorage>,
        store: ViewStore,
        filter: (ReadSignal<FilterMode>, WriteSignal<FilterMode>),
    ) -> Self {
        Self {
            state,
            store,
            filter: filter.0,
            set_filter: filter.1,
        }
    }

    /// Run a state command; failures are logged, not shown
    pub fn dispatch<R>(&self, command: impl FnOnce(&AppState) -> StateResult<R>) -> Option<R> {
        match self.state.with_value(command) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(error = %err, "todo command failed");
                None
            }
        }
    }

    pub fn set_filter(&self, mode: FilterMode) {
        self.set_filter.set(mode);
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
