//! Pages that only announce what is coming

use crate::Route;
use digistore_ui::StubPageView;
use dioxus::prelude::*;

/// Heading and placeholder text for a route without a real page yet
fn stub_copy(route: &Route) -> Option<(&'static str, &'static str)> {
    match route {
        Route::Products {} => Some(("All Products", "Products page coming soon...")),
        Route::Cart {} => Some(("Shopping Cart", "Cart page coming soon...")),
        Route::Login {} => Some(("Sign In", "Login page coming soon...")),
        Route::Register {} => Some(("Create Account", "Registration page coming soon...")),
        Route::Dashboard {} => Some(("Dashboard", "Dashboard page coming soon...")),
        Route::Home {} | Route::UndefinedRoute { .. } => None,
    }
}

fn stub_page(route: Route) -> Element {
    let Some((title, message)) = stub_copy(&route) else {
        return rsx! {};
    };

    rsx! {
        StubPageView { title: title.to_string(), message: message.to_string() }
    }
}

#[component]
pub fn Products() -> Element {
    stub_page(Route::Products {})
}

#[component]
pub fn Cart() -> Element {
    stub_page(Route::Cart {})
}

#[component]
pub fn Login() -> Element {
    stub_page(Route::Login {})
}

#[component]
pub fn Register() -> Element {
    stub_page(Route::Register {})
}

#[component]
pub fn Dashboard() -> Element {
    stub_page(Route::Dashboard {})
}
