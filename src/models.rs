//! Frontend Models
//!
//! Menu entities come from `menu-core`; view-only types live here.

pub use menu_core::{Category, MenuItem, Restaurant};
use menu_core::MenuResult;

/// Client-side route of the standalone item page
pub fn item_route(id: u32) -> String {
    format!("/item/{id}")
}

/// What the standalone detail page is showing
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found(MenuItem),
    NotFound,
}

impl DetailState {
    /// State for a finished single-item fetch.
    ///
    /// `None` when the page has moved on to another id since the request
    /// for `requested` was sent.
    pub fn from_fetch(requested: u32, current: Option<u32>, result: MenuResult<MenuItem>) -> Option<Self> {
        if current != Some(requested) {
            return None;
        }
        Some(match result {
            Ok(item) => DetailState::Found(item),
            Err(_) => DetailState::NotFound,
        })
    }
}

/// Transient confirmation shown in the corner
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Distinguishes consecutive toasts so an old timer cannot hide a new one
    pub id: u32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::fixtures::customizable_burger;
    use menu_core::MenuError;

    #[test]
    fn test_item_route() {
        assert_eq!(item_route(4), "/item/4");
    }

    #[test]
    fn test_fetch_result_for_current_id() {
        let burger = customizable_burger();
        assert_eq!(
            DetailState::from_fetch(4, Some(4), Ok(burger.clone())),
            Some(DetailState::Found(burger))
        );
        assert_eq!(
            DetailState::from_fetch(999, Some(999), Err(MenuError::NotFound("menu item 999".into()))),
            Some(DetailState::NotFound)
        );
    }

    #[test]
    fn test_late_result_for_previous_id_is_dropped() {
        // /item/999 -> /item/4 before the 999 lookup returns
        let late = Err(MenuError::NotFound("menu item 999".into()));
        assert_eq!(DetailState::from_fetch(999, Some(4), late), None);
        assert_eq!(DetailState::from_fetch(999, None, Ok(customizable_burger())), None);
    }
}
