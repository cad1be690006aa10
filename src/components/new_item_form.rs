//! New Item Form Component
//!
//! Toggle-all chevron plus the input creating new items.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::store_completed;

/// Header row: toggle-all and new item input
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (new_name, set_new_name) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        if ctx.dispatch(|state| state.add_item(name)).is_some() {
            set_new_name.set(String::new());
        }
    };

    let toggle_class = move || {
        if store_completed(&ctx.store) {
            "toggle-all done"
        } else {
            "toggle-all"
        }
    };

    view! {
        <header class="new-item-form">
            <button
                type="button"
                class=toggle_class
                title="Toggle all"
                on:click=move |_| {
                    ctx.dispatch(|state| state.toggle_all());
                }
            >
                "❯"
            </button>
            <input
                type="text"
                class="new-item-input"
                placeholder="What needs to be done?"
                autocomplete="off"
                autofocus=true
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </header>
    }
}
