//! Repository Tests
//!
//! MenuSource behaviour against the in-memory catalog.

#[cfg(test)]
mod tests {
    use crate::domain::MenuError;
    use crate::repository::{MemoryMenuSource, MenuQuery, MenuSource};

    #[tokio::test]
    async fn test_list_all_items() {
        let source = MemoryMenuSource::sample();
        let items = source.menu_items(&MenuQuery::all()).await.expect("List failed");
        assert_eq!(items.len(), 12);
        assert_eq!(source.requests(), 1);
    }

    #[tokio::test]
    async fn test_filtered_listing() {
        let source = MemoryMenuSource::sample();
        let popular = source.menu_items(&MenuQuery::popular()).await.unwrap();
        assert!(popular.iter().all(|item| item.popular));
        assert_eq!(popular.len(), 3);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let source = MemoryMenuSource::sample();
        let item = source.menu_item(4).await.expect("Find failed");
        assert_eq!(item.name, "Classic Burger");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let source = MemoryMenuSource::sample();
        let err = source.menu_item(999).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_failing_endpoints() {
        let source = MemoryMenuSource::sample().failing_categories();
        assert!(matches!(source.categories().await, Err(MenuError::Fetch { .. })));
        assert!(source.menu_items(&MenuQuery::all()).await.is_ok());

        let source = MemoryMenuSource::sample().failing_items();
        assert!(matches!(source.menu_item(1).await, Err(MenuError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_restaurant_missing_is_fetch_error() {
        let source = MemoryMenuSource::new(vec![], vec![]);
        assert!(matches!(source.restaurant().await, Err(MenuError::Fetch { .. })));
        assert_eq!(MemoryMenuSource::sample().restaurant().await.unwrap().name, "Delicious Bites");
    }
}
