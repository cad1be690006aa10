//! Footer Component
//!
//! Remaining counter and filter buttons.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::filter::{items_left_label, FilterMode};
use crate::store::store_remaining_count;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <footer class="footer">
            <span class="items-left">
                {move || items_left_label(store_remaining_count(&ctx.store))}
            </span>

            <div class="filters">
                {FilterMode::ALL.iter().map(|mode| {
                    let mode = *mode;
                    let is_selected = move || ctx.filter.get() == mode;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| ctx.set_filter(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </footer>
    }
}
