//! Menu View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! authoritative state lives in `menu_core::MenuStore`; every change it
//! announces is mirrored field by field into [`MenuViewStore`] so only the
//! views reading that field re-render.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::{
    fetch_startup, HttpMenuSource, MenuItem, MenuResult, MenuState, MenuStore, StoreEvent,
};
use reactive_stores::Store;
use tracing::{debug, info, warn};

use crate::models::Category;
use crate::{api, theme};

/// Reactive mirror of `MenuState`
#[derive(Clone, Debug, Default, Store)]
pub struct MenuViewState {
    /// Full catalog
    pub all_items: Vec<MenuItem>,
    /// Filtered view
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
    pub active_category: String,
    pub search_query: String,
    pub dark_mode: bool,
    pub selected_item: Option<MenuItem>,
    pub cart_count: u32,
}

impl From<&MenuState> for MenuViewState {
    fn from(state: &MenuState) -> Self {
        Self {
            all_items: state.catalog.clone(),
            items: state.filtered.clone(),
            categories: state.categories.clone(),
            loading: state.loading,
            error: state.error.clone(),
            active_category: state.active_category.clone(),
            search_query: state.search_query.clone(),
            dark_mode: state.dark_mode,
            selected_item: state.selected_item.clone(),
            cart_count: state.cart_count,
        }
    }
}

/// Type alias for the store
pub type MenuViewStore = Store<MenuViewState>;

// ========================
// Store Mirroring
// ========================

/// Copy the fields an event touched into the view store
fn mirror(view: MenuViewStore, state: &MenuState, event: StoreEvent) {
    debug!(?event, "menu store changed");
    match event {
        StoreEvent::LoadStarted => *view.loading().write() = true,
        StoreEvent::Loaded | StoreEvent::LoadFailed => {
            *view.all_items().write() = state.catalog.clone();
            *view.categories().write() = state.categories.clone();
            *view.items().write() = state.filtered.clone();
            *view.selected_item().write() = state.selected_item.clone();
            *view.error().write() = state.error.clone();
            *view.loading().write() = false;
        }
        StoreEvent::FilterChanged => {
            *view.active_category().write() = state.active_category.clone();
            *view.search_query().write() = state.search_query.clone();
            *view.items().write() = state.filtered.clone();
        }
        StoreEvent::DarkModeChanged => {
            theme::apply_dark_class(state.dark_mode);
            *view.dark_mode().write() = state.dark_mode;
        }
        StoreEvent::SelectionChanged => {
            *view.selected_item().write() = state.selected_item.clone();
        }
        StoreEvent::CartChanged => {
            *view.cart_count().write() = state.cart_count;
        }
    }
}

// ========================
// Controller
// ========================

/// Handle views use to read and drive the menu state
#[derive(Clone, Copy)]
pub struct MenuController {
    /// Read side for views
    pub view: MenuViewStore,
    store: StoredValue<MenuStore, LocalStorage>,
    source: StoredValue<HttpMenuSource, LocalStorage>,
}

impl MenuController {
    pub fn new(source: HttpMenuSource) -> Self {
        let mut core = MenuStore::new(
            Box::new(theme::LocalStoragePreferences),
            theme::system_prefers_dark(),
        );
        theme::apply_dark_class(core.state().dark_mode);

        let view = Store::new(MenuViewState::from(core.state()));
        core.subscribe(move |state, event| mirror(view, state, event));

        Self {
            view,
            store: StoredValue::new_local(core),
            source: StoredValue::new_local(source),
        }
    }

    /// Fetch items and categories and replace the catalog
    pub fn load(&self) {
        let store = self.store;
        let source = self.source.get_value();
        store.update_value(|s| s.begin_load());
        info!(base_url = source.base_url(), "loading menu");
        spawn_local(async move {
            let result = fetch_startup(&source).await;
            store.update_value(|s| s.finish_load(result));
        });
    }

    pub fn set_active_category(&self, category: String) {
        self.store.update_value(|s| s.set_active_category(category));
    }

    pub fn set_search_query(&self, query: String) {
        self.store.update_value(|s| s.set_search_query(query));
    }

    pub fn clear_search(&self) {
        self.store.update_value(|s| s.clear_search());
    }

    pub fn toggle_dark_mode(&self) {
        self.store.update_value(|s| {
            s.toggle_dark_mode();
        });
    }

    /// Open (`Some`) or close (`None`) the item detail view
    pub fn select_item(&self, id: Option<u32>) {
        if let Some(Err(e)) = self.store.try_update_value(|s| s.select_item(id)) {
            warn!(error = %e, "cannot open item");
        }
    }

    pub fn add_to_cart(&self, units: u32) {
        self.store.update_value(|s| s.add_to_cart(units));
    }

    /// Single item straight from the API
    pub async fn fetch_item(&self, id: u32) -> MenuResult<MenuItem> {
        let source = self.source.get_value();
        api::fetch_menu_item(&source, id).await
    }
}

/// Get the menu controller from context
pub fn use_menu() -> MenuController {
    expect_context::<MenuController>()
}
