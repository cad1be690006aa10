//! Item List Component
//!
//! The items passing the current filter.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_todo_context;
use crate::store::store_items;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_todo_context();

    let visible = move || ctx.filter.get().apply(&store_items(&ctx.store));

    view! {
        <div class="item-list">
            <For
                each=visible
                // Key on every field so an edited item gets a fresh row
                key=|item| (item.id, item.name.clone(), item.done)
                children=move |item| view! { <TodoItem item=item /> }
            />
        </div>
    }
}
