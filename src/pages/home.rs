//! Home Page
//!
//! Category chips above the paged menu grid.

use leptos::prelude::*;

use crate::components::{CategoryFilter, ItemDetailModal, MenuGrid};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="home">
            <CategoryFilter />
            <MenuGrid />
            <ItemDetailModal />
        </main>
    }
}
