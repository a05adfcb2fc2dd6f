//! Home page state store

use crate::display_types::{Category, Product};
use digistore_common::LoadState;
use dioxus::prelude::*;

/// Load state of one catalog request; errors are kept as display text
pub type CatalogLoad<T> = LoadState<Vec<T>, String>;

/// State for the home view
///
/// Products and categories load independently, so each has its own state.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct HomeState {
    /// Featured products request
    pub products: CatalogLoad<Product>,
    /// Categories request
    pub categories: CatalogLoad<Category>,
}

impl HomeState {
    /// Both requests issued and in flight.
    pub fn loading() -> Self {
        Self {
            products: LoadState::Loading,
            categories: LoadState::Loading,
        }
    }

    /// Whether the featured section should still show skeleton cards.
    ///
    /// Only the products request counts here; categories render whenever
    /// they arrive.
    pub fn show_product_skeletons(&self) -> bool {
        self.products.is_pending()
    }

    /// Products to render; empty while pending or after a failure.
    pub fn featured_products(&self) -> Vec<Product> {
        self.products.data_or_default()
    }

    /// Categories to render; empty while pending or after a failure.
    pub fn visible_categories(&self) -> Vec<Category> {
        self.categories.data_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price: 10.0,
            file_size: 1024,
            download_limit: None,
            category: None,
        }
    }

    #[test]
    fn test_skeletons_until_products_settle() {
        let mut state = HomeState::loading();
        assert!(state.show_product_skeletons());

        state.products = LoadState::Ready(vec![product(1), product(2)]);
        assert!(!state.show_product_skeletons());
        assert_eq!(state.featured_products().len(), 2);
    }

    #[test]
    fn test_categories_do_not_hold_back_products() {
        let mut state = HomeState::loading();
        state.products = LoadState::Ready(vec![product(1)]);

        assert!(state.categories.is_pending());
        assert!(!state.show_product_skeletons());
        assert!(state.visible_categories().is_empty());
    }

    #[test]
    fn test_failed_products_render_empty() {
        let mut state = HomeState::loading();
        state.products = LoadState::Failed("Network error".to_string());

        assert!(!state.show_product_skeletons());
        assert!(state.featured_products().is_empty());
    }

    #[test]
    fn test_failed_categories_render_empty() {
        let mut state = HomeState::loading();
        state.categories = LoadState::Failed("Parse error".to_string());
        assert!(state.show_product_skeletons());
        assert!(state.visible_categories().is_empty());
    }
}
