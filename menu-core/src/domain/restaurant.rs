//! Restaurant Info
//!
//! Header details served by `/restaurant`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub contact: Contact,
}

impl Restaurant {
    /// Shown when `/restaurant` is unavailable
    pub fn fallback() -> Self {
        Self {
            name: "Delicious Bites".to_string(),
            tagline: "Fresh • Flavorful • Fast".to_string(),
            description: String::new(),
            opening_hours: String::new(),
            contact: Contact::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let restaurant: Restaurant = serde_json::from_str(
            r#"{ "name": "Trattoria", "tagline": "Since 1982", "openingHours": "11:00-22:00",
                 "contact": { "phone": "555-0100" } }"#,
        )
        .unwrap();

        assert_eq!(restaurant.opening_hours, "11:00-22:00");
        assert_eq!(restaurant.contact.phone, "555-0100");
        assert!(restaurant.contact.email.is_empty());
    }
}
