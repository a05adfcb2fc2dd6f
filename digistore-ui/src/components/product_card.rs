//! Product card component - pure view with callbacks

use crate::components::icons::{ShoppingCartIcon, StarIcon};
use crate::components::utils::{format_file_size, format_price};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::Product;
use dioxus::prelude::*;

/// Individual product card component
///
/// Renders price, size and download allowance for one product. "Add to Cart"
/// hands the whole product to `on_add_to_cart`; the card holds no state.
#[component]
pub fn ProductCard(product: Product, on_add_to_cart: EventHandler<Product>) -> Element {
    let category = product.category_label().to_string();
    let limit = product.download_limit_label();
    let size = format_file_size(product.file_size);
    let price = format_price(product.price);

    rsx! {
        div {
            class: "group flex flex-col rounded-lg border border-gray-200 bg-white shadow-sm hover:shadow-lg transition-all duration-300 hover:-translate-y-1",
            "data-testid": "product-card",
            div { class: "p-6 pb-3",
                div { class: "flex items-start justify-between",
                    span {
                        class: "mb-2 inline-flex rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-semibold",
                        "data-testid": "category-badge",
                        "{category}"
                    }
                    div { class: "flex items-center space-x-1",
                        StarIcon { class: "h-4 w-4 fill-yellow-400 text-yellow-400" }
                        span { class: "text-sm text-gray-500", "4.8" }
                    }
                }
                h3 { class: "text-lg font-semibold leading-tight group-hover:text-indigo-600 transition-colors",
                    "{product.name}"
                }
                p { class: "text-sm text-gray-500 line-clamp-2", "{product.description}" }
            }
            div { class: "px-6 pb-3",
                div { class: "flex items-center justify-between text-sm text-gray-500 mb-3",
                    span { "Size: {size}" }
                    span { "data-testid": "download-limit", "Downloads: {limit}" }
                }
                div { class: "text-2xl font-bold text-indigo-600", "{price}" }
            }
            div { class: "p-6 pt-0 mt-auto",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    class: Some("w-full".to_string()),
                    onclick: {
                        let product = product.clone();
                        move |_| add_to_cart(&product, on_add_to_cart)
                    },
                    ShoppingCartIcon { class: "h-4 w-4" }
                    "Add to Cart"
                }
            }
        }
    }
}

/// Hand a copy of the card's product to the caller. The card itself keeps nothing.
fn add_to_cart(product: &Product, on_add_to_cart: EventHandler<Product>) {
    on_add_to_cart.call(product.clone());
}

/// Placeholder card shown while products are loading
#[component]
pub fn ProductCardSkeleton() -> Element {
    rsx! {
        div {
            class: "animate-pulse rounded-lg border border-gray-200 bg-white p-6",
            "data-testid": "product-skeleton",
            div { class: "h-4 bg-gray-200 rounded w-1/3 mb-2" }
            div { class: "h-6 bg-gray-200 rounded w-3/4 mb-2" }
            div { class: "h-4 bg-gray-200 rounded w-full mb-6" }
            div { class: "h-8 bg-gray-200 rounded w-1/2 mb-6" }
            div { class: "h-10 bg-gray-200 rounded w-full" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::Category;
    use std::cell::RefCell;

    thread_local! {
        static ADDED: RefCell<Vec<Product>> = const { RefCell::new(Vec::new()) };
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn toolkit() -> Product {
        Product {
            id: 2,
            name: "Web Development Toolkit".to_string(),
            description: "Essential tools and utilities for web developers.".to_string(),
            price: 1200.0,
            file_size: 15_728_640,
            download_limit: Some(5),
            category: Some(Category {
                id: 2,
                name: "Software".to_string(),
                description: "Applications and tools".to_string(),
            }),
        }
    }

    #[test]
    fn test_card_formats_price_and_size() {
        fn app() -> Element {
            rsx! {
                ProductCard { product: toolkit(), on_add_to_cart: |_| {} }
            }
        }

        let html = render(app);
        assert!(html.contains("Web Development Toolkit"));
        assert!(html.contains("$1,200.00"));
        assert!(html.contains("Size: 15 MB"));
        assert!(html.contains("Downloads: 5"));
        assert!(html.contains("Software"));
        assert!(html.contains("Add to Cart"));
    }

    #[test]
    fn test_card_defaults_for_missing_fields() {
        fn app() -> Element {
            let product = Product {
                category: None,
                download_limit: None,
                ..toolkit()
            };
            rsx! {
                ProductCard { product, on_add_to_cart: |_| {} }
            }
        }

        let html = render(app);
        assert!(html.contains("Uncategorized"));
        assert!(html.contains("Downloads: Unlimited"));
    }

    #[test]
    fn test_add_to_cart_passes_whole_product() {
        fn app() -> Element {
            let on_add_to_cart = EventHandler::new(|product: Product| {
                ADDED.with(|added| added.borrow_mut().push(product));
            });
            use_hook(|| add_to_cart(&toolkit(), on_add_to_cart));

            rsx! {
                ProductCard { product: toolkit(), on_add_to_cart }
            }
        }

        fn untouched() -> Element {
            rsx! {
                ProductCard { product: toolkit(), on_add_to_cart: |_| {} }
            }
        }

        ADDED.with(|added| added.borrow_mut().clear());
        let html = render(app);

        let added = ADDED.with(|added| added.borrow().clone());
        assert_eq!(added, vec![toolkit()]);
        assert_eq!(html, render(untouched));
    }
}
