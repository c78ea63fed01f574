//! Category Entity
//!
//! Read-only reference data served by `/categories`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Icon used when a category has none
pub const FALLBACK_ICON: &str = "🍴";

/// Category data structure (matches the API payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Slug, compared case-insensitively with `MenuItem::category`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            icon: String::new(),
        }
    }

    pub fn display_icon(&self) -> &str {
        if self.icon.trim().is_empty() {
            FALLBACK_ICON
        } else {
            &self.icon
        }
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_fallback() {
        let mut category = Category::new("soups", "Soups");
        assert_eq!(category.display_icon(), FALLBACK_ICON);

        category.icon = "🍲".into();
        assert_eq!(category.display_icon(), "🍲");
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let category: Category = serde_json::from_str(r#"{ "id": "mains", "name": "Mains" }"#).unwrap();
        assert_eq!(category, Category::new("mains", "Mains"));
    }
}
