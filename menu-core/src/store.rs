//! Menu State Store
//!
//! Single owner of the catalog, filters and UI flags, and the only writer
//! of the filtered view. Presentation layers subscribe to change events
//! instead of reading ambient global state.

use futures::future::try_join;
use tracing::{info, warn};

use crate::domain::{find_by_id, Category, MenuError, MenuItem, MenuResult};
use crate::filter::{filtered_view, ALL_CATEGORY};
use crate::preferences::{initial_dark_mode, persist_dark_mode, PreferenceStore};
use crate::repository::{MenuQuery, MenuSource};

/// Snapshot of everything the menu screens render from
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    /// Full catalog as last fetched
    pub catalog: Vec<MenuItem>,
    /// Derived from catalog + active category + search text
    pub filtered: Vec<MenuItem>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
    pub active_category: String,
    /// Stored verbatim, trimmed only when filtering
    pub search_query: String,
    pub dark_mode: bool,
    pub selected_item: Option<MenuItem>,
    pub cart_count: u32,
}

impl MenuState {
    fn new(dark_mode: bool) -> Self {
        Self {
            catalog: Vec::new(),
            filtered: Vec::new(),
            categories: Vec::new(),
            loading: true,
            error: None,
            active_category: ALL_CATEGORY.to_string(),
            search_query: String::new(),
            dark_mode,
            selected_item: None,
            cart_count: 0,
        }
    }
}

/// What changed in the last mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    LoadStarted,
    Loaded,
    LoadFailed,
    /// Active category or search text changed; the filtered view was recomputed
    FilterChanged,
    DarkModeChanged,
    SelectionChanged,
    CartChanged,
}

/// Result of the startup fetch
#[derive(Debug, Clone, PartialEq)]
pub struct StartupData {
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
}

/// Fetch the full catalog and the category list concurrently.
///
/// Either request failing fails the whole load.
pub async fn fetch_startup<S: MenuSource + ?Sized>(source: &S) -> MenuResult<StartupData> {
    let query = MenuQuery::all();
    let (items, categories) = try_join(source.menu_items(&query), source.categories()).await?;
    Ok(StartupData { items, categories })
}

pub type SubscriptionId = usize;

type Listener = Box<dyn Fn(&MenuState, StoreEvent)>;

pub struct MenuStore {
    state: MenuState,
    preferences: Box<dyn PreferenceStore>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl MenuStore {
    /// Dark mode starts from the persisted preference, else `system_prefers_dark`
    pub fn new(preferences: Box<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let dark_mode = initial_dark_mode(preferences.as_ref(), system_prefers_dark);
        Self {
            state: MenuState::new(dark_mode),
            preferences,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Call `listener` after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(&MenuState, StoreEvent) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&self, event: StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(&self.state, event);
        }
    }

    fn recompute(&mut self) {
        self.state.filtered = filtered_view(
            &self.state.catalog,
            &self.state.active_category,
            &self.state.search_query,
        );
    }

    /// Fetch and apply the startup data. No retry.
    pub async fn load<S: MenuSource + ?Sized>(&mut self, source: &S) {
        self.begin_load();
        let result = fetch_startup(source).await;
        self.finish_load(result);
    }

    pub fn begin_load(&mut self) {
        self.state.loading = true;
        self.notify(StoreEvent::LoadStarted);
    }

    pub fn finish_load(&mut self, result: MenuResult<StartupData>) {
        self.state.loading = false;
        match result {
            Ok(StartupData { items, categories }) => {
                info!(items = items.len(), categories = categories.len(), "menu loaded");
                self.state.catalog = items;
                self.state.categories = categories;
                self.state.error = None;
                let still_present = self
                    .state
                    .selected_item
                    .as_ref()
                    .is_some_and(|selected| find_by_id(&self.state.catalog, &selected.id).is_some());
                if !still_present {
                    self.state.selected_item = None;
                }
                self.recompute();
                self.notify(StoreEvent::Loaded);
            }
            Err(e) => {
                warn!(error = %e, "failed to load menu");
                self.state.catalog.clear();
                self.state.filtered.clear();
                self.state.selected_item = None;
                self.state.error = Some(e.user_message());
                self.notify(StoreEvent::LoadFailed);
            }
        }
    }

    pub fn set_active_category(&mut self, category: impl Into<String>) {
        self.state.active_category = category.into();
        self.recompute();
        self.notify(StoreEvent::FilterChanged);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.recompute();
        self.notify(StoreEvent::FilterChanged);
    }

    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }

    /// Flip and persist the flag. Returns the new value.
    ///
    /// A failed write is logged; the in-memory flag still flips.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.state.dark_mode = !self.state.dark_mode;
        if let Err(e) = persist_dark_mode(self.preferences.as_mut(), self.state.dark_mode) {
            warn!(error = %e, "could not persist dark mode preference");
        }
        self.notify(StoreEvent::DarkModeChanged);
        self.state.dark_mode
    }

    /// Show detail for a catalog item, or close it with `None`
    pub fn select_item(&mut self, id: Option<u32>) -> MenuResult<()> {
        let selected = match id {
            Some(id) => Some(
                find_by_id(&self.state.catalog, &id)
                    .cloned()
                    .ok_or_else(|| MenuError::NotFound(format!("menu item {id}")))?,
            ),
            None => None,
        };
        self.state.selected_item = selected;
        self.notify(StoreEvent::SelectionChanged);
        Ok(())
    }

    /// Counter only; availability is the caller's concern
    pub fn add_to_cart(&mut self, units: u32) {
        self.state.cart_count = self.state.cart_count.saturating_add(units);
        self.notify(StoreEvent::CartChanged);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::LOAD_FAILED_MESSAGE;
    use crate::fixtures::sample_items;
    use crate::preferences::{MemoryPreferences, DARK_MODE_KEY};
    use crate::repository::MemoryMenuSource;

    fn store() -> MenuStore {
        MenuStore::new(Box::new(MemoryPreferences::new()), false)
    }

    fn loaded_store() -> MenuStore {
        let mut store = store();
        store.finish_load(Ok(StartupData {
            items: sample_items(),
            categories: crate::fixtures::sample_categories(),
        }));
        store
    }

    #[test]
    fn test_initial_state() {
        let store = store();
        let state = store.state();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.active_category, ALL_CATEGORY);
        assert_eq!(state.cart_count, 0);
        assert!(state.filtered.is_empty());
    }

    #[tokio::test]
    async fn test_load_success() {
        let source = MemoryMenuSource::sample();
        let mut store = store();
        store.load(&source).await;

        let state = store.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.catalog.len(), 12);
        assert_eq!(state.filtered, state.catalog);
        assert_eq!(state.categories.len(), 4);
        assert_eq!(source.requests(), 2);
    }

    #[tokio::test]
    async fn test_load_fails_when_either_request_fails() {
        for source in [
            MemoryMenuSource::sample().failing_items(),
            MemoryMenuSource::sample().failing_categories(),
        ] {
            let mut store = store();
            store.load(&source).await;

            let state = store.state();
            assert!(!state.loading);
            assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
            assert!(state.catalog.is_empty());
            assert!(state.filtered.is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_reload_drops_selection() {
        let mut store = loaded_store();
        store.select_item(Some(8)).unwrap();

        store.load(&MemoryMenuSource::sample().failing_items()).await;

        let state = store.state();
        assert!(state.catalog.is_empty());
        assert!(state.selected_item.is_none());
        assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_successful_reload_clears_error() {
        let mut store = store();
        store.load(&MemoryMenuSource::sample().failing_items()).await;
        assert!(store.state().error.is_some());

        store.load(&MemoryMenuSource::sample()).await;
        assert!(store.state().error.is_none());
        assert_eq!(store.state().catalog.len(), 12);
    }

    #[test]
    fn test_category_and_search_recompute_from_catalog() {
        let mut store = loaded_store();

        store.set_active_category("desserts");
        assert_eq!(store.state().filtered.len(), 3);

        store.set_search_query("  Chocolate ");
        assert_eq!(store.state().search_query, "  Chocolate ");
        assert_eq!(store.state().filtered.len(), 1);

        // widening the category works because filtering starts from the catalog
        store.set_active_category(ALL_CATEGORY);
        assert_eq!(store.state().filtered.len(), 1);

        store.clear_search();
        assert_eq!(store.state().search_query, "");
        assert_eq!(store.state().filtered.len(), 12);
        assert!(store.state().filtered.iter().all(|item| store.state().catalog.contains(item)));
    }

    #[test]
    fn test_add_to_cart_counts_units() {
        let mut store = loaded_store();
        store.add_to_cart(1);
        store.add_to_cart(1);
        store.add_to_cart(1);
        assert_eq!(store.state().cart_count, 3);

        store.add_to_cart(4);
        assert_eq!(store.state().cart_count, 7);
    }

    #[test]
    fn test_select_item_requires_catalog_membership() {
        let mut store = loaded_store();
        store.select_item(Some(8)).unwrap();
        assert_eq!(store.state().selected_item.as_ref().map(|item| item.id), Some(8));

        let err = store.select_item(Some(404)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.state().selected_item.as_ref().map(|item| item.id), Some(8));

        store.select_item(None).unwrap();
        assert!(store.state().selected_item.is_none());
    }

    #[test]
    fn test_toggle_dark_mode_persists() {
        let mut store = MenuStore::new(Box::new(MemoryPreferences::new().with(DARK_MODE_KEY, "true")), false);
        assert!(store.state().dark_mode);

        assert!(!store.toggle_dark_mode());
        assert!(store.toggle_dark_mode());
        assert_eq!(store.preferences.get(DARK_MODE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_subscribers_receive_events() {
        let mut store = loaded_store();
        let seen: Rc<RefCell<Vec<(StoreEvent, usize)>>> = Rc::default();

        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state, event| sink.borrow_mut().push((event, state.filtered.len())));

        store.set_active_category("beverages");
        store.add_to_cart(2);
        store.toggle_dark_mode();

        assert_eq!(
            *seen.borrow(),
            vec![
                (StoreEvent::FilterChanged, 2),
                (StoreEvent::CartChanged, 2),
                (StoreEvent::DarkModeChanged, 2),
            ]
        );

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.clear_search();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_load_emits_start_and_finish() {
        let mut store = store();
        let events: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
        let sink = Rc::clone(&events);
        store.subscribe(move |_, event| sink.borrow_mut().push(event));

        store.load(&MemoryMenuSource::sample().failing_categories()).await;
        assert_eq!(*events.borrow(), vec![StoreEvent::LoadStarted, StoreEvent::LoadFailed]);
    }
}
