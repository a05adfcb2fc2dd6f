//! Category card component

use crate::components::icons::DownloadIcon;
use crate::display_types::Category;
use dioxus::prelude::*;

#[component]
pub fn CategoryCard(category: Category) -> Element {
    rsx! {
        div {
            class: "group cursor-pointer rounded-lg border border-gray-200 bg-white p-6 text-center hover:shadow-md transition-shadow",
            "data-testid": "category-card",
            div { class: "h-12 w-12 rounded-lg bg-indigo-50 mx-auto mb-3 flex items-center justify-center group-hover:bg-indigo-100 transition-colors",
                DownloadIcon { class: "h-6 w-6 text-indigo-600" }
            }
            h3 { class: "font-semibold mb-1", "{category.name}" }
            p { class: "text-sm text-gray-500", "{category.description}" }
        }
    }
}
