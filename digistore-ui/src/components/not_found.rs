//! View for paths that no route claims

use crate::components::helpers::PageContainer;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Explicit "no page here" state. Shows the requested path and leaves the
/// decision to go home to the user.
#[component]
pub fn UndefinedRouteView(path: String, on_go_home: EventHandler<()>) -> Element {
    rsx! {
        PageContainer {
            div { class: "text-center py-16", "data-testid": "undefined-route",
                h1 { class: "text-3xl font-bold mb-4", "Page not found" }
                p { class: "text-gray-500 mb-8", "Nothing is available at {path} yet." }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_go_home.call(()),
                    "Back to Home"
                }
            }
        }
    }
}
