//! In-Memory Menu Source
//!
//! Serves a fixed catalog with API semantics. Individual endpoints can be
//! made to fail to exercise error paths.

use std::cell::Cell;

use async_trait::async_trait;

use super::query::MenuQuery;
use super::traits::MenuSource;
use super::http_source::{CATEGORIES_ENDPOINT, MENU_ITEMS_ENDPOINT, RESTAURANT_ENDPOINT};
use crate::domain::{find_by_id, Category, MenuError, MenuItem, MenuResult, Restaurant};
use crate::fixtures;

#[derive(Debug, Default)]
pub struct MemoryMenuSource {
    restaurant: Option<Restaurant>,
    categories: Vec<Category>,
    items: Vec<MenuItem>,
    fail_categories: bool,
    fail_items: bool,
    requests: Cell<usize>,
}

impl MemoryMenuSource {
    pub fn new(items: Vec<MenuItem>, categories: Vec<Category>) -> Self {
        Self {
            items,
            categories,
            ..Self::default()
        }
    }

    /// The sample catalog from [`crate::fixtures`]
    pub fn sample() -> Self {
        Self::new(fixtures::sample_items(), fixtures::sample_categories())
            .with_restaurant(fixtures::sample_restaurant())
    }

    pub fn with_restaurant(mut self, restaurant: Restaurant) -> Self {
        self.restaurant = Some(restaurant);
        self
    }

    /// Make `/categories` fail
    pub fn failing_categories(mut self) -> Self {
        self.fail_categories = true;
        self
    }

    /// Make `/menuItems` (list and single) fail
    pub fn failing_items(mut self) -> Self {
        self.fail_items = true;
        self
    }

    /// Number of requests served so far
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn record(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[async_trait(?Send)]
impl MenuSource for MemoryMenuSource {
    async fn restaurant(&self) -> MenuResult<Restaurant> {
        self.record();
        self.restaurant
            .clone()
            .ok_or_else(|| MenuError::fetch(RESTAURANT_ENDPOINT, "HTTP error! status: 404"))
    }

    async fn categories(&self) -> MenuResult<Vec<Category>> {
        self.record();
        if self.fail_categories {
            return Err(MenuError::fetch(CATEGORIES_ENDPOINT, "HTTP error! status: 500"));
        }
        Ok(self.categories.clone())
    }

    async fn menu_items(&self, query: &MenuQuery) -> MenuResult<Vec<MenuItem>> {
        self.record();
        if self.fail_items {
            return Err(MenuError::fetch(MENU_ITEMS_ENDPOINT, "HTTP error! status: 500"));
        }
        Ok(self.items.iter().filter(|item| query.matches(item)).cloned().collect())
    }

    async fn menu_item(&self, id: u32) -> MenuResult<MenuItem> {
        self.record();
        if self.fail_items {
            return Err(MenuError::fetch(MENU_ITEMS_ENDPOINT, "HTTP error! status: 500"));
        }
        find_by_id(&self.items, &id)
            .cloned()
            .ok_or_else(|| MenuError::NotFound(format!("menu item {id}")))
    }
}
