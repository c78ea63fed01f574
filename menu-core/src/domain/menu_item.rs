//! Menu Item Entity
//!
//! A dish on the menu, as served by `/menuItems`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Highest value of the spicy meter
pub const MAX_SPICY_LEVEL: u8 = 5;

/// A size choice with a price delta relative to the base price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    pub name: String,
    /// May be negative, zero or positive
    pub price_modifier: f64,
}

/// An optional extra with its own price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,
    pub price: f64,
}

/// Per-item customization options
///
/// Options are looked up by display name. When two entries share a name
/// the first one wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customizations {
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

impl Customizations {
    pub fn size(&self, name: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|size| size.name == name)
    }

    pub fn add_on(&self, name: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|add_on| add_on.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty() && self.add_ons.is_empty()
    }
}

/// Menu item data structure (matches the API payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in the currency's major unit
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub spicy_level: u8,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub available: bool,
    /// Minutes
    #[serde(default)]
    pub preparation_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Customizations>,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Create an available item with no extras
    pub fn new(id: u32, name: &str, description: &str, category: &str, price: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: String::new(),
            category: category.to_string(),
            dietary: Vec::new(),
            spicy_level: 0,
            popular: false,
            available: true,
            preparation_time: 0,
            ingredients: None,
            customizations: None,
        }
    }

    pub fn with_customizations(mut self, customizations: Customizations) -> Self {
        self.customizations = Some(customizations);
        self
    }

    /// Case-insensitive category equality
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Substring match over name and description.
    /// `needle` must already be trimmed and lower-cased.
    pub fn matches_needle(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Spicy level clamped to the 0..=5 meter
    pub fn heat(&self) -> u8 {
        self.spicy_level.min(MAX_SPICY_LEVEL)
    }

    pub fn sizes(&self) -> &[SizeOption] {
        self.customizations.as_ref().map(|c| c.sizes.as_slice()).unwrap_or(&[])
    }

    pub fn add_ons(&self) -> &[AddOn] {
        self.customizations.as_ref().map(|c| c.add_ons.as_slice()).unwrap_or(&[])
    }

    /// The size preselected on the detail view
    pub fn default_size(&self) -> Option<&SizeOption> {
        self.sizes().first()
    }
}

impl Entity for MenuItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": 7,
        "name": "Margherita Pizza",
        "description": "Tomato, mozzarella and basil",
        "price": 12.5,
        "image": "/img/margherita.jpg",
        "category": "Mains",
        "dietary": ["vegetarian"],
        "spicyLevel": 0,
        "popular": true,
        "available": true,
        "preparationTime": 15,
        "ingredients": ["tomato", "mozzarella", "basil"],
        "customizations": {
            "sizes": [
                { "name": "Small", "priceModifier": -2 },
                { "name": "Large", "priceModifier": 3.5 }
            ],
            "addOns": [{ "name": "Extra cheese", "price": 1.5 }]
        }
    }"#;

    #[test]
    fn test_deserialize_full_payload() {
        let item: MenuItem = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(item.id, 7);
        assert_eq!(item.preparation_time, 15);
        assert!(item.popular);
        assert_eq!(item.sizes().len(), 2);
        assert_eq!(item.sizes()[0].price_modifier, -2.0);
        assert_eq!(item.add_ons()[0].name, "Extra cheese");
        assert_eq!(item.default_size().map(|s| s.name.as_str()), Some("Small"));
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let item: MenuItem = serde_json::from_str(
            r#"{ "id": 1, "name": "Water", "price": 1, "category": "beverages" }"#,
        )
        .unwrap();

        assert!(item.available);
        assert!(item.dietary.is_empty());
        assert!(item.customizations.is_none());
        assert!(item.sizes().is_empty());
        assert!(item.add_ons().is_empty());
    }

    #[test]
    fn test_partial_customizations() {
        let item: MenuItem = serde_json::from_str(
            r#"{ "id": 2, "name": "Latte", "price": 4, "category": "beverages",
                 "customizations": { "addOns": [{ "name": "Oat milk", "price": 0.6 }] } }"#,
        )
        .unwrap();

        assert!(item.sizes().is_empty());
        assert_eq!(item.add_ons().len(), 1);
        assert!(item.default_size().is_none());
    }

    #[test]
    fn test_category_and_needle_matching() {
        let item = MenuItem::new(3, "Chocolate Lava Cake", "Warm molten centre", "Desserts", 8.0);

        assert!(item.in_category("desserts"));
        assert!(item.in_category("DESSERTS"));
        assert!(!item.in_category("dessert"));
        assert!(item.matches_needle("lava"));
        assert!(item.matches_needle("molten"));
        assert!(!item.matches_needle("vanilla"));
    }

    #[test]
    fn test_heat_is_clamped() {
        let mut item = MenuItem::new(4, "Vindaloo", "", "mains", 14.0);
        item.spicy_level = 9;
        assert_eq!(item.heat(), MAX_SPICY_LEVEL);
    }

    #[test]
    fn test_duplicate_option_names_resolve_to_first() {
        let customizations = Customizations {
            sizes: vec![
                SizeOption { name: "Large".into(), price_modifier: 2.0 },
                SizeOption { name: "Large".into(), price_modifier: 5.0 },
            ],
            add_ons: vec![],
        };
        assert_eq!(customizations.size("Large").map(|s| s.price_modifier), Some(2.0));
        assert!(customizations.add_on("Bacon").is_none());
    }
}
