use crate::config::StoreConfig;
use digistore_ui::display_types::{Category, Product};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Failure of a catalog request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Products listing envelope. Pagination fields are ignored.
///
/// Items stay raw here so one malformed product does not sink the page.
#[derive(Deserialize)]
struct ProductListEnvelope {
    #[serde(default)]
    products: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct ApiProduct {
    id: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    file_size: Option<u64>,
    #[serde(default)]
    download_limit: Option<i64>,
    #[serde(default)]
    category: Option<ApiCategory>,
}

#[derive(Deserialize)]
struct ApiCategory {
    id: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<ApiCategory> for Category {
    fn from(c: ApiCategory) -> Self {
        Category {
            id: c.id,
            name: c.name,
            description: c.description.unwrap_or_default(),
        }
    }
}

impl From<ApiProduct> for Product {
    fn from(p: ApiProduct) -> Self {
        Product {
            id: p.id,
            name: p.name,
            description: p.description.unwrap_or_default(),
            price: p.price.unwrap_or(0.0),
            file_size: p.file_size.unwrap_or(0),
            // Zero or negative limits mean no limit
            download_limit: p
                .download_limit
                .and_then(|limit| u32::try_from(limit).ok())
                .filter(|limit| *limit > 0),
            category: p.category.map(Category::from),
        }
    }
}

/// Read-only client for the catalog endpoints of the store API
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    api_base: String,
}

impl CatalogClient {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.clone(),
        }
    }

    pub fn products_url(&self, per_page: u32) -> String {
        format!("{}/products?per_page={}", self.api_base, per_page)
    }

    pub fn categories_url(&self) -> String {
        format!("{}/categories", self.api_base)
    }

    /// Fetch one page of products. A body without a `products` field yields
    /// an empty list; items that cannot be read as a product are skipped.
    pub async fn fetch_products(&self, per_page: u32) -> Result<Vec<Product>, ApiError> {
        let envelope: ProductListEnvelope = self.get_json(&self.products_url(per_page)).await?;
        Ok(envelope
            .products
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<ApiProduct>(item) {
                Ok(product) => Some(Product::from(product)),
                Err(e) => {
                    warn!("Skipping malformed product: {e}");
                    None
                }
            })
            .collect())
    }

    /// Fetch all categories. The endpoint returns a bare array; `null` yields
    /// an empty list.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let categories: Option<Vec<ApiCategory>> = self.get_json(&self.categories_url()).await?;
        Ok(categories
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status().as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
