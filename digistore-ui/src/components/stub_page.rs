//! Placeholder page for routes that are not built yet

use crate::components::helpers::PageContainer;
use dioxus::prelude::*;

/// Static "coming soon" page body
#[component]
pub fn StubPageView(title: String, message: String) -> Element {
    rsx! {
        PageContainer {
            h1 { class: "text-3xl font-bold mb-6", "{title}" }
            p { "data-testid": "stub-message", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_page_renders_title_and_message() {
        fn app() -> Element {
            rsx! {
                StubPageView {
                    title: "Shopping Cart".to_string(),
                    message: "Cart page coming soon...".to_string(),
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<h1"));
        assert!(html.contains("Shopping Cart"));
        assert!(html.contains("Cart page coming soon..."));
    }
}
