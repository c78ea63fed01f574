//! Header Component
//!
//! Restaurant name, search box, dark-mode toggle and cart badge.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::SearchBar;
use crate::context::use_app_context;
use crate::format::cart_badge_label;
use crate::store::{use_menu, MenuViewStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let menu = use_menu();
    let view_store = menu.view;

    let dark_mode = move || view_store.dark_mode().get();

    view! {
        <header class="site-header">
            <A href="/" attr:class="brand">
                <span class="brand-logo">"🍽️"</span>
                <div class="brand-text">
                    <h1 class="brand-name">{move || ctx.restaurant.get().name}</h1>
                    <p class="brand-tagline">{move || ctx.restaurant.get().tagline}</p>
                </div>
            </A>

            <div class="header-search">
                <SearchBar />
            </div>

            <div class="header-actions">
                <button
                    class="icon-btn theme-toggle"
                    title=move || if dark_mode() { "Switch to light mode" } else { "Switch to dark mode" }
                    on:click=move |_| menu.toggle_dark_mode()
                >
                    {move || if dark_mode() { "☀️" } else { "🌙" }}
                </button>
                <CartButton />
            </div>
        </header>
    }
}

/// Cart icon with a count badge
#[component]
fn CartButton() -> impl IntoView {
    let view_store = use_menu().view;
    let badge = move || cart_badge_label(view_store.cart_count().get());

    view! {
        <button class="icon-btn cart-btn" title="Cart">
            "🛒"
            {move || badge().map(|label| view! { <span class="cart-badge">{label}</span> })}
        </button>
    }
}
