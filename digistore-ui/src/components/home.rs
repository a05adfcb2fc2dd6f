//! Home view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<HomeState>` and reads the products and categories lenses
//! separately, so each section re-renders only for its own request.

use crate::components::category_card::CategoryCard;
use crate::components::footer::StoreFooter;
use crate::components::helpers::ErrorDisplay;
use crate::components::product_card::{ProductCard, ProductCardSkeleton};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::{Category, Product};
use crate::stores::home::{CatalogLoad, HomeState, HomeStateStoreExt};
use dioxus::prelude::*;

/// Skeleton cards shown when no page size is given
pub const DEFAULT_PLACEHOLDER_COUNT: usize = 6;

/// Landing page: hero, categories, featured products and footer
#[component]
pub fn HomeView(
    state: ReadStore<HomeState>,
    /// Number of skeleton cards while products load (matches the page size)
    #[props(default = DEFAULT_PLACEHOLDER_COUNT)]
    placeholder_count: usize,
    on_add_to_cart: EventHandler<Product>,
    on_browse_products: EventHandler<()>,
) -> Element {
    let products = state.products().read().clone();
    let categories = state.categories().read().data_or_default();

    rsx! {
        div { class: "min-h-screen",
            HeroSection { on_browse_products }
            CategoryGrid { categories }
            FeaturedProducts {
                products,
                placeholder_count,
                on_add_to_cart,
                on_view_all: on_browse_products,
            }
            StoreFooter {}
        }
    }
}

#[component]
fn HeroSection(on_browse_products: EventHandler<()>) -> Element {
    rsx! {
        section { class: "bg-gradient-to-br from-indigo-50 via-white to-gray-50 py-20",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center max-w-4xl mx-auto",
                    h1 { class: "text-4xl md:text-6xl font-bold mb-6 text-indigo-700",
                        "Premium Digital Products"
                    }
                    p { class: "text-xl text-gray-500 mb-8 leading-relaxed",
                        "Discover high-quality digital downloads including e-books, software, templates, and courses. "
                        "Instant access, lifetime downloads, and professional support."
                    }
                    div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            onclick: move |_| on_browse_products.call(()),
                            "Browse Products"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Large,
                            onclick: |_| {},
                            "Learn More"
                        }
                    }
                }
            }
        }
    }
}

/// Category tiles; renders an empty grid when nothing loaded
#[component]
pub fn CategoryGrid(categories: Vec<Category>) -> Element {
    rsx! {
        section { class: "py-16 bg-gray-50",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center mb-12",
                    h2 { class: "text-3xl font-bold mb-4", "Shop by Category" }
                    p { class: "text-gray-500 text-lg",
                        "Find exactly what you are looking for in our organized categories"
                    }
                }
                div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4",
                    for category in categories {
                        CategoryCard { key: "{category.id}", category }
                    }
                }
            }
        }
    }
}

/// Featured products section
///
/// Skeletons while the products request is pending, cards once it settles.
/// A failed request renders no cards plus a short notice.
#[component]
pub fn FeaturedProducts(
    products: CatalogLoad<Product>,
    #[props(default = DEFAULT_PLACEHOLDER_COUNT)] placeholder_count: usize,
    on_add_to_cart: EventHandler<Product>,
    on_view_all: EventHandler<()>,
) -> Element {
    let pending = products.is_pending();
    let failed = products.is_failed();
    let items = products.data_or_default();

    rsx! {
        section { class: "py-16",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center mb-12",
                    h2 { class: "text-3xl font-bold mb-4", "Featured Products" }
                    p { class: "text-gray-500 text-lg",
                        "Our most popular and highly-rated digital products"
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    if pending {
                        for i in 0..placeholder_count {
                            ProductCardSkeleton { key: "{i}" }
                        }
                    } else {
                        for product in items.iter() {
                            ProductCard {
                                key: "{product.id}",
                                product: product.clone(),
                                on_add_to_cart,
                            }
                        }
                    }
                }

                if failed {
                    ErrorDisplay { message: "Products could not be loaded right now.".to_string() }
                } else if !pending && items.is_empty() {
                    p { class: "text-center text-sm text-gray-400 mt-6", "No products available yet." }
                }

                div { class: "text-center mt-12",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        onclick: move |_| on_view_all.call(()),
                        "View All Products"
                    }
                }
            }
        }
    }
}
