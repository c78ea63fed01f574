//! Item Detail Body
//!
//! Picture, description and facts about one item. Used by the modal and
//! the standalone item page.

use leptos::prelude::*;

use crate::components::{DietaryBadges, PopularBadge, SpicyMeter};
use crate::format::format_price;
use crate::models::MenuItem;

#[component]
pub fn ItemDetailBody(item: MenuItem) -> impl IntoView {
    let ingredients = item.ingredients.clone().filter(|list| !list.is_empty());

    view! {
        <div class="detail-body">
            <div class="detail-image">
                {(!item.image.is_empty()).then(|| view! {
                    <img src=item.image.clone() alt=item.name.clone() />
                })}
                {(!item.available).then(|| view! {
                    <div class="unavailable-overlay">"Currently Unavailable"</div>
                })}
            </div>

            <div class="detail-heading">
                <h2>{item.name.clone()}</h2>
                {item.popular.then(|| view! { <PopularBadge /> })}
                <span class="detail-price">{format_price(item.price)}</span>
            </div>
            <p class="detail-description">{item.description.clone()}</p>

            <div class="detail-facts">
                <SpicyMeter level=item.heat() show_label=true />
                {(item.preparation_time > 0).then(|| view! {
                    <span class="prep-time">"⏱️ " {item.preparation_time} " min"</span>
                })}
            </div>

            {(!item.dietary.is_empty()).then(|| view! { <DietaryBadges tags=item.dietary.clone() /> })}

            {ingredients.map(|list| view! {
                <div class="ingredients">
                    <h4>"Ingredients"</h4>
                    <ul>
                        {list.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
