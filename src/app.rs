//! Todo Frontend App
//!
//! Wires the state container into the component tree.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::AppState;

use crate::components::{Footer, ItemList, NewItemForm, TitleBar};
use crate::context::TodoContext;
use crate::filter::FilterMode;
use crate::store::{bind_view_store, ViewState};

#[component]
pub fn App(state: AppState) -> impl IntoView {
    let store = Store::new(ViewState::default());
    bind_view_store(&state, store);

    let filter = signal(FilterMode::default());

    // Provide context to all children
    provide_context(TodoContext::new(StoredValue::new_local(state), store, filter));

    view! {
        <div class="todo-app">
            <TitleBar />
            <NewItemForm />
            <ItemList />
            <Footer />
        </div>
    }
}
