//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod search_bar;
mod category_filter;
mod menu_grid;
mod menu_card;
mod pagination;
mod item_badges;
mod item_detail_body;
mod item_detail_modal;
mod customization_panel;
mod toast;
mod scroll_to_top;
mod log_panel;

pub use header::Header;
pub use search_bar::SearchBar;
pub use category_filter::CategoryFilter;
pub use menu_grid::MenuGrid;
pub use menu_card::MenuCard;
pub use pagination::Pagination;
pub use item_badges::{DietaryBadges, PopularBadge, SpicyMeter};
pub use item_detail_body::ItemDetailBody;
pub use item_detail_modal::ItemDetailModal;
pub use customization_panel::CustomizationPanel;
pub use toast::ToastHost;
pub use scroll_to_top::ScrollToTop;
pub use log_panel::LogPanel;
