pub mod api;
pub mod config;
pub mod pages;

use config::StoreConfig;
use digistore_common::SessionCart;
use dioxus::prelude::*;
use pages::{Cart, Dashboard, Home, Login, Products, Register, StoreLayout, UndefinedRoute};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreLayout)]
    #[route("/")]
    Home {},
    #[route("/products")]
    Products {},
    #[route("/cart")]
    Cart {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..segments")]
    UndefinedRoute { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(StoreConfig::load);
    use_context_provider(|| Signal::new(SessionCart::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "DigitalStore" }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
