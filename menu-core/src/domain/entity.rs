//! Domain Layer - Core Entity Trait
//!
//! Basic contract for menu entities plus the shared error type.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find an entity by ID in a slice, preserving first-match semantics
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &T::Id) -> Option<&'a T> {
    entities.iter().find(|entity| &entity.id() == id)
}

/// Message shown to the user whenever the catalog cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load menu. Please check that the menu API is running and try again.";

/// Common result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Menu-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// Network failure, non-2xx status or undecodable body
    #[error("request to {endpoint} failed: {reason}")]
    Fetch { endpoint: String, reason: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MenuError {
    pub fn fetch(endpoint: &str, reason: impl ToString) -> Self {
        MenuError::Fetch {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MenuError::NotFound(_))
    }

    /// Text suitable for the end user. Fetch details are never exposed.
    pub fn user_message(&self) -> String {
        match self {
            MenuError::Fetch { .. } => LOAD_FAILED_MESSAGE.to_string(),
            MenuError::NotFound(_) => "Item not found".to_string(),
            MenuError::InvalidInput(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_hide_details_from_users() {
        let err = MenuError::fetch("/menuItems", "HTTP status 503");
        assert_eq!(err.to_string(), "request to /menuItems failed: HTTP status 503");
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_distinct() {
        let err = MenuError::NotFound("menu item 42".into());
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Item not found");
    }
}
