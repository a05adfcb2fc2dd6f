//! Store footer component

use crate::components::icons::DownloadIcon;
use dioxus::prelude::*;

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Products", ["E-books", "Software", "Templates", "Courses"]),
    ("Support", ["Help Center", "Contact Us", "Downloads", "Refunds"]),
    ("Company", ["About", "Privacy", "Terms", "Blog"]),
];

#[component]
pub fn StoreFooter() -> Element {
    rsx! {
        footer { class: "bg-gray-100 py-12",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "grid grid-cols-1 md:grid-cols-4 gap-8",
                    div {
                        div { class: "flex items-center space-x-2 mb-4",
                            div { class: "h-8 w-8 rounded-lg bg-indigo-600 flex items-center justify-center",
                                DownloadIcon { class: "h-5 w-5 text-white" }
                            }
                            span { class: "text-xl font-bold", "DigitalStore" }
                        }
                        p { class: "text-gray-500",
                            "Your trusted source for premium digital products and instant downloads."
                        }
                    }
                    for (heading, links) in FOOTER_COLUMNS {
                        div { key: "{heading}",
                            h3 { class: "font-semibold mb-4", "{heading}" }
                            ul { class: "space-y-2 text-gray-500",
                                for link in links {
                                    li { key: "{link}",
                                        span { class: "hover:text-gray-900 transition-colors cursor-pointer",
                                            "{link}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "border-t border-gray-200 mt-8 pt-8 text-center text-gray-500",
                    p { "© 2025 DigitalStore. All rights reserved." }
                }
            }
        }
    }
}
