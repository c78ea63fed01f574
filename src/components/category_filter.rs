//! Category Filter Component
//!
//! "All" chip plus one chip per category, each with its item count.

use leptos::prelude::*;
use menu_core::{count_in_category, ALL_CATEGORY};

use crate::store::{use_menu, MenuViewStateStoreFields};

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let menu = use_menu();
    let view_store = menu.view;

    let active = move || view_store.active_category().get();
    let total = move || view_store.all_items().read().len();

    view! {
        <nav class="category-filter" aria-label="Categories">
            <button
                class=move || if active() == ALL_CATEGORY { "category-chip active" } else { "category-chip" }
                on:click=move |_| menu.set_active_category(ALL_CATEGORY.to_string())
            >
                <span class="chip-icon">"🍽️"</span>
                "All"
                <span class="chip-count">{total}</span>
            </button>
            <For
                each=move || view_store.categories().get()
                key=|category| category.id.clone()
                children=move |category| {
                    let id = category.id.clone();
                    let count_id = id.clone();
                    let click_id = id.clone();
                    let is_active = move || active() == id;
                    let count = move || count_in_category(&view_store.all_items().read(), &count_id);

                    view! {
                        <button
                            class=move || if is_active() { "category-chip active" } else { "category-chip" }
                            title=category.description.clone()
                            on:click=move |_| menu.set_active_category(click_id.clone())
                        >
                            <span class="chip-icon">{category.display_icon().to_string()}</span>
                            {category.name.clone()}
                            <span class="chip-count">{count}</span>
                        </button>
                    }
                }
            />
        </nav>
    }
}
