//! Menu Item Query
//!
//! Server-side filters accepted by `/menuItems`.

use serde::Serialize;

use crate::domain::MenuItem;

/// Query parameters for `/menuItems`; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}

impl MenuQuery {
    /// The whole catalog
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_category(category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Self::default()
        }
    }

    pub fn search(term: &str) -> Self {
        Self {
            name_like: Some(term.to_string()),
            ..Self::default()
        }
    }

    pub fn popular() -> Self {
        Self {
            popular: Some(true),
            ..Self::default()
        }
    }

    pub fn and_name_like(mut self, term: &str) -> Self {
        self.name_like = Some(term.to_string());
        self
    }

    pub fn and_popular(mut self) -> Self {
        self.popular = Some(true);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.name_like.is_none() && self.popular.is_none()
    }

    /// Server semantics: exact category, case-insensitive name substring,
    /// exact popularity flag
    pub fn matches(&self, item: &MenuItem) -> bool {
        let category_ok = self.category.as_ref().map_or(true, |c| &item.category == c);
        let name_ok = self
            .name_like
            .as_ref()
            .map_or(true, |term| item.name.to_lowercase().contains(&term.to_lowercase()));
        let popular_ok = self.popular.map_or(true, |p| item.popular == p);
        category_ok && name_ok && popular_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_items;

    #[test]
    fn test_serializes_only_set_fields() {
        let query = MenuQuery::by_category("mains").and_popular();
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({ "category": "mains", "popular": true }));

        let json = serde_json::to_value(MenuQuery::all()).unwrap();
        assert_eq!(json, serde_json::json!({}));
        assert!(MenuQuery::all().is_empty());
    }

    #[test]
    fn test_matches_like_the_api() {
        let items = sample_items();
        let popular: Vec<u32> = items
            .iter()
            .filter(|item| MenuQuery::popular().matches(item))
            .map(|item| item.id)
            .collect();
        assert_eq!(popular, vec![1, 4, 8]);

        let search = MenuQuery::search("CHICKEN");
        assert_eq!(items.iter().filter(|item| search.matches(item)).count(), 1);

        // category is an exact match on the server
        let exact = MenuQuery::by_category("desserts");
        assert_eq!(items.iter().filter(|item| exact.matches(item)).count(), 2);

        let combined = MenuQuery::by_category("desserts").and_name_like("lava").and_popular();
        assert_eq!(items.iter().filter(|item| combined.matches(item)).count(), 1);
    }
}
