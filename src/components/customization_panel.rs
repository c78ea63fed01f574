//! Customization Panel Component
//!
//! Size, add-ons and quantity for one item, with a live total and the
//! add-to-cart button.

use leptos::prelude::*;
use menu_core::{Quantity, Selection};
use tracing::info;

use crate::context::use_app_context;
use crate::format::{format_delta, format_price};
use crate::models::MenuItem;
use crate::store::use_menu;

#[component]
pub fn CustomizationPanel(
    item: MenuItem,
    /// Runs after the item was added
    #[prop(optional)]
    on_added: Option<Callback<()>>,
) -> impl IntoView {
    let menu = use_menu();
    let ctx = use_app_context();

    let selection = RwSignal::new(Selection::for_item(&item));
    let sizes = item.sizes().to_vec();
    let add_ons = item.add_ons().to_vec();
    let available = item.available;
    let item = StoredValue::new(item);

    let total = Memo::new(move |_| item.with_value(|i| selection.with(|s| s.total(i))));
    let quantity = move || selection.with(|s| s.quantity);

    let add_to_cart = move |_| {
        let units = selection.with_untracked(|s| s.quantity.get());
        let name = item.with_value(|i| i.name.clone());
        menu.add_to_cart(units);
        info!(units, item = %name, "added to cart");
        ctx.show_toast(format!("{units}x {name} added to cart!"));
        selection.set(item.with_value(Selection::for_item));
        if let Some(callback) = on_added {
            callback.run(());
        }
    };

    view! {
        <div class="customization-panel">
            {(!sizes.is_empty()).then(|| view! {
                <div class="option-group">
                    <h4>"Size"</h4>
                    <div class="option-row">
                        {sizes.into_iter().map(|size| {
                            let name = size.name.clone();
                            let click_name = name.clone();
                            let is_selected = move || selection.with(|s| s.size.as_deref() == Some(name.as_str()));
                            view! {
                                <button
                                    class=move || if is_selected() { "option-chip active" } else { "option-chip" }
                                    on:click=move |_| selection.update(|s| s.select_size(&click_name))
                                >
                                    {size.name.clone()}
                                    {(size.price_modifier != 0.0).then(|| view! {
                                        <span class="option-delta">{format_delta(size.price_modifier)}</span>
                                    })}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            })}

            {(!add_ons.is_empty()).then(|| view! {
                <div class="option-group">
                    <h4>"Add-ons"</h4>
                    <div class="option-row">
                        {add_ons.into_iter().map(|add_on| {
                            let name = add_on.name.clone();
                            let click_name = name.clone();
                            let is_picked = move || selection.with(|s| s.has_add_on(&name));
                            let pressed = is_picked.clone();
                            view! {
                                <button
                                    class=move || if is_picked() { "option-chip active" } else { "option-chip" }
                                    aria-pressed=move || pressed().to_string()
                                    on:click=move |_| selection.update(|s| s.toggle_add_on(&click_name))
                                >
                                    {add_on.name.clone()}
                                    <span class="option-delta">{format_delta(add_on.price)}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            })}

            <div class="option-group quantity-row">
                <h4>"Quantity"</h4>
                <div class="stepper">
                    <button
                        class="stepper-btn"
                        disabled=move || quantity().at_min()
                        on:click=move |_| selection.update(|s| s.quantity = s.quantity.decrement())
                    >
                        "−"
                    </button>
                    <span class="stepper-value">{move || quantity().get()}</span>
                    <button
                        class="stepper-btn"
                        disabled=move || quantity().at_max()
                        on:click=move |_| selection.update(|s| s.quantity = s.quantity.increment())
                    >
                        "+"
                    </button>
                </div>
            </div>

            <button class="btn-primary add-to-cart" disabled=!available on:click=add_to_cart>
                {if available { "Add to Cart - " } else { "Unavailable - " }}
                {move || format_price(total.get())}
            </button>
        </div>
    }
}
