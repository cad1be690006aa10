//! Todo Frontend Entry Point

mod app;
mod components;
mod context;
mod filter;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use todo_core::AppState;

use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let state = match AppState::new(BrowserStorage::new()) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "failed to start todo state");
            return;
        }
    };
    tracing::info!(items = state.len(), "todo state ready");

    mount_to_body(move || view! { <App state=state /> })
}
