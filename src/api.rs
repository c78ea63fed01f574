//! Menu API Wrappers
//!
//! Frontend bindings to the menu HTTP API.

use menu_core::{ApiConfig, HttpMenuSource, MenuResult, MenuSource, Restaurant};
use tracing::warn;

/// Source configured from the build environment
pub fn menu_source() -> HttpMenuSource {
    HttpMenuSource::new(ApiConfig::from_build_env())
}

/// Restaurant info for the header; falls back to the built-in name
pub async fn restaurant_or_fallback(source: &HttpMenuSource) -> Restaurant {
    match source.restaurant().await {
        Ok(restaurant) => restaurant,
        Err(e) => {
            warn!(error = %e, "restaurant info unavailable, using fallback");
            Restaurant::fallback()
        }
    }
}

pub async fn fetch_menu_item(source: &HttpMenuSource, id: u32) -> MenuResult<menu_core::MenuItem> {
    source.menu_item(id).await
}
