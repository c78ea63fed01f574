//! Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.toast.get().map(|toast| view! {
            <div class="toast" role="status" on:click=move |_| ctx.dismiss_toast()>
                <span class="toast-icon">"✅"</span>
                {toast.message}
            </div>
        })
    }
}
