//! Todo Item Component
//!
//! One row: done check, name (double-click to edit) and remove button.

use leptos::html;
use leptos::prelude::*;
use todo_core::Item;

use crate::context::use_todo_context;

/// A single item row
#[component]
pub fn TodoItem(item: Item) -> impl IntoView {
    let ctx = use_todo_context();

    let id = item.id;
    let done = item.done;
    let name = item.name.clone();
    let (editing, set_editing) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Focus the editor as soon as it is mounted
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let commit = move |value: String| {
        set_editing.set(false);
        ctx.dispatch(|state| state.set_name(id, value));
    };

    let check_class = if done { "item-check done" } else { "item-check" };
    let name_class = if done { "item-name done" } else { "item-name" };

    view! {
        <div class="item-row">
            <button
                type="button"
                class=check_class
                on:click=move |_| {
                    ctx.dispatch(|state| state.toggle_item(id));
                }
            >
                {if done { "✓" } else { "" }}
            </button>

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span
                        class=name_class
                        on:dblclick=move |_| set_editing.set(true)
                    >
                        {name.clone()}
                    </span>
                }
            >
                <input
                    type="text"
                    class="item-edit"
                    node_ref=input_ref
                    value=item.name.clone()
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            commit(event_target_value(&ev));
                        }
                    }
                    on:blur=move |ev| {
                        if editing.get_untracked() {
                            commit(event_target_value(&ev));
                        }
                    }
                />
            </Show>

            <button
                type="button"
                class="item-remove"
                title="Remove"
                on:click=move |_| {
                    ctx.dispatch(|state| state.delete_item(id));
                }
            >
                "×"
            </button>
        </div>
    }
}
