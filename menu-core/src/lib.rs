//! Menu Core
//!
//! Layered architecture:
//! - domain: menu entities and errors
//! - repository: read-only data sources (HTTP, in-memory)
//! - filter, pricing, pagination: pure view logic
//! - store: the menu state store and its subscriptions

pub mod config;
pub mod domain;
pub mod filter;
pub mod fixtures;
pub mod pagination;
pub mod preferences;
pub mod pricing;
pub mod repository;
pub mod store;

pub use config::ApiConfig;
pub use domain::{
    find_by_id, AddOn, Category, Customizations, Entity, MenuError, MenuItem, MenuResult, Restaurant,
    SizeOption, LOAD_FAILED_MESSAGE,
};
pub use filter::{count_in_category, filtered_view, is_all, ALL_CATEGORY};
pub use pagination::{
    page_labels, page_size_for_width, paginate, total_pages, Page, PageCursor, PageLabel,
};
pub use preferences::{MemoryPreferences, PreferenceStore};
pub use pricing::{Quantity, Selection};
pub use repository::{HttpMenuSource, MemoryMenuSource, MenuQuery, MenuSource};
pub use store::{fetch_startup, MenuState, MenuStore, StartupData, StoreEvent, SubscriptionId};
