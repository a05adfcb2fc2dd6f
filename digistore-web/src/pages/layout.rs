use crate::Route;
use digistore_common::{CartService, SessionCart};
use digistore_ui::{HeaderView, NavItem, StoreLayoutView};
use dioxus::prelude::*;
use tracing::warn;

/// Header links as (label, path)
const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Products", "/products"),
    ("Categories", "/categories"),
];

fn nav_items_for(current: &Route) -> Vec<NavItem> {
    let current_path = current.to_string();
    NAV_LINKS
        .iter()
        .map(|(label, path)| NavItem {
            label: label.to_string(),
            path: path.to_string(),
            is_active: current_path == *path,
        })
        .collect()
}

fn navigate_to(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(e) => warn!("No route for {path}: {e}"),
    }
}

#[component]
pub fn StoreLayout() -> Element {
    let current_route = use_route::<Route>();
    let cart: Signal<SessionCart> = use_context();
    let cart_count = cart.read().count();
    let nav_items = nav_items_for(&current_route);

    rsx! {
        StoreLayoutView {
            header: rsx! {
                HeaderView {
                    nav_items,
                    on_nav_click: move |path: String| navigate_to(&path),
                    on_logo_click: move |_| {
                        navigator().push(Route::Home {});
                    },
                    cart_count,
                    on_cart_click: move |_| {
                        navigator().push(Route::Cart {});
                    },
                    on_sign_in_click: move |_| {
                        navigator().push(Route::Login {});
                    },
                }
            },
            Outlet::<Route> {}
        }
    }
}
