//! HTTP catalog source

use reqwest::Client;
use tracing::debug;

use crate::{
    catalog::{CatalogError, CatalogSource},
    config::CatalogConfig,
    products::Product,
};

/// Fetches the catalog with a single `GET` to a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
    http: Client,
}

impl HttpCatalog {
    /// Create a source for the configured endpoint.
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_url(config.url.clone())
    }

    /// Create a source for an explicit URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    /// Endpoint this source requests.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        debug!(url = %self.url, products = products.len(), "catalog fetched");

        Ok(products)
    }
}
