//! Item Detail Modal Component
//!
//! Overlay for the selected item. Closes on backdrop click, the close
//! button, Escape, or after adding to the cart.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{CustomizationPanel, ItemDetailBody};
use crate::store::{use_menu, MenuViewStateStoreFields};

#[component]
pub fn ItemDetailModal() -> impl IntoView {
    let menu = use_menu();
    let view_store = menu.view;

    let close = move || menu.select_item(None);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && view_store.selected_item().read_untracked().is_some() {
            close();
        }
    });
    on_cleanup(move || keydown.remove());

    move || {
        view_store.selected_item().get().map(|item| {
            let on_added = Callback::new(move |_| close());
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button class="modal-close" title="Close" on:click=move |_| close()>"✕"</button>
                        <ItemDetailBody item=item.clone() />
                        <CustomizationPanel item=item on_added=on_added />
                    </div>
                </div>
            }
        })
    }
}
