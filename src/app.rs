//! Menu Browser Frontend App
//!
//! Router, shared context and the startup load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api;
use crate::components::{Header, LogPanel, ScrollToTop, ToastHost};
use crate::context::AppContext;
use crate::models::{Restaurant, Toast};
use crate::pages::{Home, ItemDetail};
use crate::store::MenuController;

#[component]
pub fn App() -> impl IntoView {
    let source = api::menu_source();
    let menu = MenuController::new(source.clone());
    let restaurant = signal(Restaurant::fallback());
    let toast = signal::<Option<Toast>>(None);

    // Provide context to all children
    let ctx = AppContext::new(restaurant, toast);
    provide_context(ctx);
    provide_context(menu);

    // Catalog and restaurant load independently
    menu.load();
    spawn_local(async move {
        ctx.set_restaurant(api::restaurant_or_fallback(&source).await);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Header />
                <Routes fallback=|| view! { <p class="route-missing">"Page not found"</p> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/item/:id") view=ItemDetail />
                </Routes>
                <ToastHost />
                <ScrollToTop />
                <LogPanel />
            </div>
        </Router>
    }
}
