//! Title Bar Component
//!
//! App heading with a clock refreshed every second.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CLOCK_TICK_MS: u32 = 1_000;

fn now_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Heading and live clock
#[component]
pub fn TitleBar() -> impl IntoView {
    let (now, set_now) = signal(now_label());

    // Stops once the signal is disposed with the component
    spawn_local(async move {
        loop {
            TimeoutFuture::new(CLOCK_TICK_MS).await;
            if set_now.try_set(now_label()).is_some() {
                break;
            }
        }
    });

    view! {
        <div class="title-bar">
            <h1 class="title">"Todo"</h1>
            <span class="clock">{move || now.get()}</span>
        </div>
    }
}
