//! Pagination Component
//!
//! Previous / page numbers / next. Hidden for a single page.

use leptos::prelude::*;
use menu_core::{page_labels, PageLabel};

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        if page != current.get_untracked() {
            on_change.run(page);
        }
    };

    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination" aria-label="Pages">
                <button
                    class="page-btn prev"
                    disabled=move || current.get() <= 1
                    on:click=move |_| go(current.get_untracked().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                {move || page_labels(current.get(), total.get()).into_iter().map(move |label| match label {
                    PageLabel::Page(n) => view! {
                        <button
                            class=move || if current.get() == n { "page-btn active" } else { "page-btn" }
                            on:click=move |_| go(n)
                        >
                            {n}
                        </button>
                    }.into_any(),
                    PageLabel::Ellipsis => view! { <span class="page-ellipsis">"…"</span> }.into_any(),
                }).collect_view()}
                <button
                    class="page-btn next"
                    disabled=move || current.get() >= total.get()
                    on:click=move |_| go(current.get_untracked() + 1)
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
