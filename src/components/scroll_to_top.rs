//! Scroll-To-Top Button
//!
//! Appears once the page has scrolled past a screenful.

use leptos::prelude::*;
use leptos_viewport::{scroll_to_top, use_viewport};

/// Scroll offset in px before the button shows
const SHOW_AFTER: f64 = 400.0;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = use_viewport().scrolled_past(SHOW_AFTER);

    view! {
        <Show when=move || visible.get()>
            <button class="scroll-top" title="Back to top" on:click=move |_| scroll_to_top()>
                "↑"
            </button>
        </Show>
    }
}
