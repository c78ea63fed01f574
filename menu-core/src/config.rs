//! API Configuration
//!
//! Base origin of the menu API. Read from `MENU_API_BASE` at runtime
//! (native) or at build time (browser bundle).

use std::env;

use tracing::{info, warn};

use crate::domain::{MenuError, MenuResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const BASE_URL_VAR: &str = "MENU_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin without a trailing slash, e.g. `http://localhost:3001`
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Validate and normalise a base URL
    pub fn new(base_url: &str) -> MenuResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = match trimmed.split_once("://") {
            Some(("http" | "https", rest)) => rest,
            _ => {
                return Err(MenuError::InvalidInput(format!(
                    "base URL must start with http:// or https://, got {base_url:?}"
                )))
            }
        };
        if host.is_empty() {
            return Err(MenuError::InvalidInput(format!("base URL has no host: {base_url:?}")));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Runtime environment
    pub fn from_env() -> Self {
        Self::from_value(env::var(BASE_URL_VAR).ok())
    }

    /// Value baked in when the bundle was compiled, else the runtime
    /// environment
    pub fn from_build_env() -> Self {
        match option_env!("MENU_API_BASE") {
            Some(raw) => Self::from_value(Some(raw.to_string())),
            None => Self::from_env(),
        }
    }

    fn from_value(value: Option<String>) -> Self {
        let Some(raw) = value else {
            info!("{BASE_URL_VAR} not set, using default: {DEFAULT_BASE_URL}");
            return Self::default();
        };
        Self::new(&raw).unwrap_or_else(|e| {
            warn!("Invalid {BASE_URL_VAR} value: {e}");
            Self::default()
        })
    }

    /// Absolute URL for an endpoint path such as `/categories`
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
