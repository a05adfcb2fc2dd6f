use crate::Route;
use digistore_ui::UndefinedRouteView;
use dioxus::prelude::*;

#[component]
pub fn UndefinedRoute(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        UndefinedRouteView {
            path,
            on_go_home: move |_| {
                navigator().push(Route::Home {});
            },
        }
    }
}
