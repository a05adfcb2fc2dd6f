//! Storefront layout view component
//!
//! Provides the page frame with a sticky header slot above the routed content.

use dioxus::prelude::*;

/// Storefront layout view (pure, props-based)
#[component]
pub fn StoreLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional header at the top
    #[props(default)]
    header: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-white text-gray-900 flex flex-col",
            if let Some(header) = header {
                {header}
            }
            main { class: "flex-1", {children} }
        }
    }
}
