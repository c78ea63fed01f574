//! Item Detail Page
//!
//! `/item/:id`. Resolves the item from the loaded catalog, waiting for the
//! catalog if it is still loading, and falls back to fetching it alone.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use menu_core::find_by_id;
use tracing::{debug, warn};

use crate::components::{CustomizationPanel, ItemDetailBody};
use crate::models::DetailState;
use crate::store::{use_menu, MenuViewStateStoreFields};

#[component]
pub fn ItemDetail() -> impl IntoView {
    let menu = use_menu();
    let view_store = menu.view;
    let params = use_params_map();
    let item_id = move || params.read().get("id").and_then(|raw| raw.parse::<u32>().ok());
    let current_id = move || params.read_untracked().get("id").and_then(|raw| raw.parse::<u32>().ok());

    let (detail, set_detail) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let Some(id) = item_id() else {
            set_detail.set(DetailState::NotFound);
            return;
        };

        let cached = find_by_id(view_store.all_items().read().as_slice(), &id).cloned();
        if let Some(item) = cached {
            set_detail.set(DetailState::Found(item));
            return;
        }
        // Re-runs when loading flips
        if view_store.loading().get() {
            set_detail.set(DetailState::Loading);
            return;
        }

        debug!(id, "item not in catalog, fetching");
        spawn_local(async move {
            let result = menu.fetch_item(id).await;
            if let Err(e) = &result {
                if !e.is_not_found() {
                    warn!(id, error = %e, "item fetch failed");
                }
            }
            match DetailState::from_fetch(id, current_id(), result) {
                Some(state) => set_detail.set(state),
                None => debug!(id, "dropping stale item fetch"),
            }
        });
    });

    move || match detail.get() {
        DetailState::Loading => view! {
            <main class="item-page">
                <div class="detail-skeleton" aria-busy="true">
                    <div class="skeleton-image"></div>
                    <div class="skeleton-line wide"></div>
                    <div class="skeleton-line"></div>
                </div>
            </main>
        }
        .into_any(),
        DetailState::NotFound => view! {
            <main class="item-page not-found">
                <h2>"Item not found"</h2>
                <p>"This dish is not on the menu."</p>
                <A href="/" attr:class="btn-primary">"Back to Menu"</A>
            </main>
        }
        .into_any(),
        DetailState::Found(item) => view! {
            <main class="item-page">
                <A href="/" attr:class="back-link">"← Back to Menu"</A>
                <div class="item-page-content">
                    <ItemDetailBody item=item.clone() />
                    <CustomizationPanel item=item />
                </div>
            </main>
        }
        .into_any(),
    }
}
