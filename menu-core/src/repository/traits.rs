//! Repository Layer - Core Traits
//!
//! Read-only access to the menu API. Implementations can use HTTP,
//! in-memory data, etc.

use async_trait::async_trait;

use super::query::MenuQuery;
use crate::domain::{Category, MenuItem, MenuResult, Restaurant};

/// Read-only menu data source
///
/// Futures are not `Send`: sources run on the browser's single-threaded
/// executor.
#[async_trait(?Send)]
pub trait MenuSource {
    /// `GET /restaurant`
    async fn restaurant(&self) -> MenuResult<Restaurant>;

    /// `GET /categories`
    async fn categories(&self) -> MenuResult<Vec<Category>>;

    /// `GET /menuItems` with optional filters
    async fn menu_items(&self, query: &MenuQuery) -> MenuResult<Vec<MenuItem>>;

    /// `GET /menuItems/{id}`; `MenuError::NotFound` for an unknown id
    async fn menu_item(&self, id: u32) -> MenuResult<MenuItem>;
}
