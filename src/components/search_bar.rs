//! Search Bar Component
//!
//! Free-text search over item names and descriptions.

use leptos::prelude::*;

use crate::store::{use_menu, MenuViewStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let menu = use_menu();
    let query = move || menu.view.search_query().get();

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                class="search-input"
                placeholder="Search dishes..."
                aria-label="Search menu"
                prop:value=query
                on:input=move |ev| menu.set_search_query(event_target_value(&ev))
            />
            <Show when=move || !query().is_empty()>
                <button class="search-clear" title="Clear search" on:click=move |_| menu.clear_search()>
                    "✕"
                </button>
            </Show>
        </div>
    }
}
