//! Menu Card Component
//!
//! One item in the grid. Clicking the card opens the detail modal.

use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::JsCast;

use crate::components::{DietaryBadges, PopularBadge, SpicyMeter};
use crate::format::format_price;
use crate::models::{item_route, MenuItem};
use crate::store::use_menu;

#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let menu = use_menu();
    let id = item.id;
    let image = (!item.image.is_empty()).then(|| item.image.clone());
    let card_class = if item.available { "menu-card" } else { "menu-card unavailable" };

    view! {
        <article class=card_class on:click=move |ev| {
            if !from_link(&ev) {
                menu.select_item(Some(id));
            }
        }>
            <div class="card-image">
                {match image {
                    Some(src) => view! { <img src=src alt=item.name.clone() loading="lazy" /> }.into_any(),
                    None => view! { <div class="image-placeholder">"🍽️"</div> }.into_any(),
                }}
                {item.popular.then(|| view! { <PopularBadge /> })}
                {(!item.available).then(|| view! {
                    <div class="unavailable-overlay">"Currently Unavailable"</div>
                })}
            </div>
            <div class="card-body">
                <div class="card-title-row">
                    <h3 class="card-title">{item.name.clone()}</h3>
                    <span class="card-price">{format_price(item.price)}</span>
                </div>
                <p class="card-description">{item.description.clone()}</p>
                <div class="card-meta">
                    <DietaryBadges tags=item.dietary.clone() />
                    <SpicyMeter level=item.heat() />
                </div>
                <A href=item_route(id) attr:class="card-link">
                    "View details →"
                </A>
            </div>
        </article>
    }
}

/// Clicks on the details link navigate instead of opening the modal
fn from_link(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}
