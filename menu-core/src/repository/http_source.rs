//! HTTP Menu Source
//!
//! reqwest client for the JSON menu API. Uses the browser fetch API when
//! compiled to wasm32.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::query::MenuQuery;
use super::traits::MenuSource;
use crate::config::ApiConfig;
use crate::domain::{Category, MenuError, MenuItem, MenuResult, Restaurant};

pub const RESTAURANT_ENDPOINT: &str = "/restaurant";
pub const CATEGORIES_ENDPOINT: &str = "/categories";
pub const MENU_ITEMS_ENDPOINT: &str = "/menuItems";

#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    client: Client,
    config: ApiConfig,
}

impl HttpMenuSource {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn send(&self, endpoint: &str, query: Option<&MenuQuery>) -> MenuResult<Response> {
        let mut request = self.client.get(self.config.url(endpoint));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(query);
        }

        debug!(endpoint, "GET");
        request.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "request failed");
            MenuError::fetch(endpoint, e)
        })
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> MenuResult<T> {
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "unexpected status");
            return Err(MenuError::fetch(endpoint, format!("HTTP error! status: {}", status.as_u16())));
        }
        response.json::<T>().await.map_err(|e| {
            warn!(endpoint, error = %e, "invalid response body");
            MenuError::fetch(endpoint, e)
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: Option<&MenuQuery>) -> MenuResult<T> {
        let response = self.send(endpoint, query).await?;
        Self::decode(endpoint, response).await
    }
}

#[async_trait(?Send)]
impl MenuSource for HttpMenuSource {
    async fn restaurant(&self) -> MenuResult<Restaurant> {
        self.get_json(RESTAURANT_ENDPOINT, None).await
    }

    async fn categories(&self) -> MenuResult<Vec<Category>> {
        self.get_json(CATEGORIES_ENDPOINT, None).await
    }

    async fn menu_items(&self, query: &MenuQuery) -> MenuResult<Vec<MenuItem>> {
        self.get_json(MENU_ITEMS_ENDPOINT, Some(query)).await
    }

    async fn menu_item(&self, id: u32) -> MenuResult<MenuItem> {
        let endpoint = format!("{MENU_ITEMS_ENDPOINT}/{id}");
        let response = self.send(&endpoint, None).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(id, "menu item not found");
            return Err(MenuError::NotFound(format!("menu item {id}")));
        }
        Self::decode(&endpoint, response).await
    }
}
