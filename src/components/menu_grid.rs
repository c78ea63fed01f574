//! Menu Grid Component
//!
//! The filtered view, one page at a time. Also owns the loading skeleton,
//! error panel and empty states.

use leptos::prelude::*;
use leptos_viewport::use_viewport;
use menu_core::{is_all, page_size_for_width, paginate, total_pages, PageCursor};
use tracing::debug;

use crate::components::{MenuCard, Pagination};
use crate::store::{use_menu, MenuViewStateStoreFields};

#[component]
pub fn MenuGrid() -> impl IntoView {
    let menu = use_menu();
    let view_store = menu.view;
    let viewport = use_viewport();

    let page_size = Memo::new(move |_| page_size_for_width(viewport.width.get()));
    let cursor = RwSignal::new(PageCursor::default());

    // Back to page 1 whenever the filtered view changes identity
    Effect::new(move |_| {
        let len = view_store.items().read().len();
        let query = view_store.search_query().get();
        cursor.update(|c| {
            if c.sync(len, &query) {
                debug!(len, "filtered view changed, page reset");
            }
        });
    });

    let total = Memo::new(move |_| total_pages(view_store.items().read().len(), page_size.get()));

    // A wider viewport can leave the cursor past the last page
    Effect::new(move |_| {
        let total = total.get();
        if cursor.with_untracked(|c| c.page() > total.max(1)) {
            cursor.update(|c| c.go_to(total, total));
        }
    });

    let current = Memo::new(move |_| cursor.with(|c| c.page()));
    let page_items = Memo::new(move |_| {
        let items = view_store.items().read();
        let visible = paginate(items.as_slice(), current.get(), page_size.get()).items.to_vec();
        visible
    });

    let on_page = Callback::new(move |page: usize| {
        cursor.update(|c| c.go_to(page, total.get_untracked()));
        leptos_viewport::scroll_to_top();
    });

    move || {
        if view_store.loading().get() {
            return view! { <SkeletonGrid count=page_size.get() /> }.into_any();
        }
        if let Some(message) = view_store.error().get() {
            return view! { <ErrorPanel message=message /> }.into_any();
        }
        if view_store.items().read().is_empty() {
            return view! { <EmptyState /> }.into_any();
        }

        view! {
            <section class="menu-section">
                <ResultSummary />
                <div class="menu-grid">
                    <For
                        each=move || page_items.get()
                        key=|item| item.id
                        children=|item| view! { <MenuCard item=item /> }
                    />
                </div>
                <Pagination current=current total=total on_change=on_page />
            </section>
        }
        .into_any()
    }
}

/// "Found N items matching …" while searching, else "Showing N items in X"
#[component]
fn ResultSummary() -> impl IntoView {
    let view_store = use_menu().view;

    let count = move || view_store.items().read().len();
    let noun = move || if count() == 1 { "item" } else { "items" };
    let category_name = move || {
        let active = view_store.active_category().get();
        if is_all(&active) {
            return "all categories".to_string();
        }
        let name = view_store
            .categories()
            .read()
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(&active))
            .map(|c| c.name.clone());
        name.unwrap_or(active)
    };

    move || {
        let query = view_store.search_query().get();
        if query.is_empty() {
            view! {
                <p class="result-summary">
                    "Showing " {count} " " {noun} " in " {category_name}
                </p>
            }
            .into_any()
        } else {
            view! {
                <div class="search-banner">
                    "Found " <strong>{count}</strong> " " {noun} " matching \"" {query} "\""
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    let menu = use_menu();
    let query = move || menu.view.search_query().get();

    move || {
        let q = query();
        if q.is_empty() {
            view! {
                <div class="empty-state">
                    <span class="empty-icon">"🍽️"</span>
                    <p>"No items available in this category"</p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="empty-state">
                    <span class="empty-icon">"🔍"</span>
                    <p>"No items found matching \"" {q} "\""</p>
                    <button class="btn-primary" on:click=move |_| menu.clear_search()>
                        "Clear Search"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ErrorPanel(message: String) -> impl IntoView {
    let reload = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="error-panel" role="alert">
            <span class="error-icon">"⚠️"</span>
            <p>{message}</p>
            <button class="btn-primary" on:click=reload>"Try Again"</button>
        </div>
    }
}

/// Placeholder cards while the catalog loads
#[component]
fn SkeletonGrid(count: usize) -> impl IntoView {
    view! {
        <div class="menu-grid skeleton" aria-busy="true">
            {(0..count).map(|_| view! {
                <div class="menu-card skeleton-card">
                    <div class="skeleton-image"></div>
                    <div class="skeleton-line wide"></div>
                    <div class="skeleton-line"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
