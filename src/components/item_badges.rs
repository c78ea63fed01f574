//! Item Badges
//!
//! Dietary tags, spicy meter and popularity markers shared by cards and
//! detail views.

use leptos::prelude::*;
use menu_core::domain::MAX_SPICY_LEVEL;

use crate::format::{capitalize, dietary_class};

#[component]
pub fn DietaryBadges(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="dietary-badges">
            {tags.into_iter().map(|tag| {
                view! { <span class=dietary_class(&tag)>{capitalize(&tag)}</span> }
            }).collect_view()}
        </div>
    }
}

/// Filled and empty peppers up to the maximum heat
#[component]
pub fn SpicyMeter(level: u8, #[prop(optional)] show_label: bool) -> impl IntoView {
    if level == 0 {
        return if show_label {
            view! { <span class="spicy-meter none">"Not spicy"</span> }.into_any()
        } else {
            ().into_any()
        };
    }

    view! {
        <span class="spicy-meter" title=format!("Spicy level {level} of {MAX_SPICY_LEVEL}")>
            {(1..=MAX_SPICY_LEVEL).map(|n| {
                let class = if n <= level { "pepper hot" } else { "pepper" };
                view! { <span class=class>"🌶️"</span> }
            }).collect_view()}
        </span>
    }
    .into_any()
}

#[component]
pub fn PopularBadge() -> impl IntoView {
    view! { <span class="popular-badge">"⭐ Popular"</span> }
}
