//! Filtered View
//!
//! Pure derivation of the visible items from the catalog, the active
//! category and the search text. Always applied to the full catalog.

use crate::domain::MenuItem;

/// Sentinel category that disables category filtering
pub const ALL_CATEGORY: &str = "all";

pub fn is_all(category: &str) -> bool {
    category == ALL_CATEGORY
}

/// Compute the filtered view, preserving catalog order.
///
/// 1. keep items whose category equals `category` case-insensitively,
///    unless `category` is [`ALL_CATEGORY`]
/// 2. if the trimmed query is non-empty, keep items whose name or
///    description contains it case-insensitively
pub fn filtered_view(catalog: &[MenuItem], category: &str, query: &str) -> Vec<MenuItem> {
    let needle = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|item| is_all(category) || item.in_category(category))
        .filter(|item| needle.is_empty() || item.matches_needle(&needle))
        .cloned()
        .collect()
}

/// Number of catalog items shown on a category chip
pub fn count_in_category(catalog: &[MenuItem], category: &str) -> usize {
    if is_all(category) {
        return catalog.len();
    }
    catalog.iter().filter(|item| item.in_category(category)).count()
}
