//! Display types for UI components
//!
//! These types hold only the catalog fields the storefront renders. The web
//! crate maps API payloads into them, which keeps every view props-based and
//! renderable from fixture data.

/// Category display info
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Product display info
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in USD
    pub price: f64,
    /// Size of the downloadable file in bytes
    pub file_size: u64,
    /// Downloads allowed per purchase. None = unlimited.
    pub download_limit: Option<u32>,
    pub category: Option<Category>,
}

impl Product {
    /// Badge text for the product's category.
    pub fn category_label(&self) -> &str {
        match &self.category {
            Some(category) if !category.name.is_empty() => &category.name,
            _ => "Uncategorized",
        }
    }

    /// Download allowance text; a missing or zero limit reads as unlimited.
    pub fn download_limit_label(&self) -> String {
        match self.download_limit {
            Some(limit) if limit > 0 => limit.to_string(),
            _ => "Unlimited".to_string(),
        }
    }
}

/// Signed-in user as shown in the header
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub username: String,
}
