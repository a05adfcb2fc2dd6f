//! Header view component
//!
//! Pure, props-based storefront header: logo, navigation, search box, cart
//! badge, sign-in affordance and a collapsible mobile menu.

use crate::components::icons::{
    DownloadIcon, MenuIcon, SearchIcon, ShoppingCartIcon, UserIcon, XIcon,
};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::CurrentUser;
use dioxus::prelude::*;
use tracing::debug;

/// Navigation item for the header
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: String,
    /// Path handed to `on_nav_click`
    pub path: String,
    pub is_active: bool,
}

/// Open/closed state of the mobile menu.
///
/// Lives only inside a mounted header and starts closed on every mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Storefront header with its own mobile-menu state
///
/// Cart count and user are display values only; the header never derives them.
/// The menu starts closed on every mount.
#[component]
pub fn HeaderView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    on_logo_click: EventHandler<()>,
    cart_count: u32,
    on_cart_click: EventHandler<()>,
    #[props(default)] user: Option<CurrentUser>,
    on_sign_in_click: EventHandler<()>,
) -> Element {
    let mut menu = use_signal(MobileMenu::default);

    rsx! {
        HeaderBar {
            nav_items,
            on_nav_click,
            on_logo_click,
            cart_count,
            on_cart_click,
            user,
            on_sign_in_click,
            menu: menu(),
            on_toggle_menu: move |_| {
                menu.write().toggle();
                debug!("Mobile menu open: {}", menu().is_open());
            },
        }
    }
}

/// Header bar (pure, props-based)
#[component]
pub fn HeaderBar(
    // Navigation - called with the item's path
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    on_logo_click: EventHandler<()>,
    // Cart
    cart_count: u32,
    on_cart_click: EventHandler<()>,
    // Account
    #[props(default)] user: Option<CurrentUser>,
    on_sign_in_click: EventHandler<()>,
    // Mobile menu
    menu: MobileMenu,
    on_toggle_menu: EventHandler<()>,
) -> Element {
    let menu_open = menu.is_open();

    rsx! {
        header { class: "sticky top-0 z-50 w-full border-b border-gray-200 bg-white/95 backdrop-blur",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex h-16 items-center justify-between",
                    // Logo
                    button {
                        class: "flex items-center space-x-2",
                        r#type: "button",
                        onclick: move |_| on_logo_click.call(()),
                        div { class: "h-8 w-8 rounded-lg bg-indigo-600 flex items-center justify-center",
                            DownloadIcon { class: "h-5 w-5 text-white" }
                        }
                        span { class: "text-xl font-bold", "DigitalStore" }
                    }

                    // Desktop navigation
                    nav { class: "hidden md:flex items-center space-x-6",
                        for item in nav_items.iter() {
                            NavLink {
                                key: "{item.path}",
                                item: item.clone(),
                                on_click: on_nav_click,
                                class: "text-sm font-medium transition-colors",
                            }
                        }
                    }

                    // Right side actions
                    div { class: "flex items-center space-x-4",
                        div { class: "hidden sm:flex items-center",
                            SearchBox { class: "w-64" }
                        }

                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            class: Some("relative".to_string()),
                            aria_label: Some("Cart".to_string()),
                            onclick: move |_| on_cart_click.call(()),
                            ShoppingCartIcon { class: "h-4 w-4" }
                            if cart_count > 0 {
                                span {
                                    class: "absolute -top-2 -right-2 h-5 w-5 rounded-full bg-indigo-600 text-white flex items-center justify-center text-xs",
                                    "data-testid": "cart-badge",
                                    "{cart_count}"
                                }
                            }
                        }

                        if let Some(user) = &user {
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Small,
                                onclick: |_| {},
                                UserIcon { class: "h-4 w-4" }
                                span { "data-testid": "current-user", "{user.username}" }
                            }
                        } else {
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Small,
                                onclick: move |_| on_sign_in_click.call(()),
                                "Sign In"
                            }
                        }

                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            class: Some("md:hidden".to_string()),
                            aria_label: Some("Toggle menu".to_string()),
                            onclick: move |_| on_toggle_menu.call(()),
                            if menu_open {
                                XIcon { class: "h-4 w-4" }
                            } else {
                                MenuIcon { class: "h-4 w-4" }
                            }
                        }
                    }
                }

                if menu_open {
                    div {
                        class: "md:hidden border-t border-gray-200 py-4",
                        "data-testid": "mobile-menu",
                        nav { class: "flex flex-col space-y-2",
                            for item in nav_items.iter() {
                                NavLink {
                                    key: "{item.path}",
                                    item: item.clone(),
                                    on_click: on_nav_click,
                                    class: "text-left text-sm font-medium transition-colors py-2",
                                }
                            }
                            div { class: "pt-2",
                                SearchBox { class: "w-full" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem, on_click: EventHandler<String>, class: &'static str) -> Element {
    let state_class = if item.is_active {
        "text-indigo-600"
    } else {
        "text-gray-700 hover:text-indigo-600"
    };
    let path = item.path.clone();

    rsx! {
        button {
            class: "{class} {state_class}",
            r#type: "button",
            onclick: move |_| on_click.call(path.clone()),
            "{item.label}"
        }
    }
}

/// Search input. Accepts text but does not search yet.
#[component]
fn SearchBox(class: &'static str) -> Element {
    rsx! {
        div { class: "relative {class}",
            span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-400",
                SearchIcon { class: "h-4 w-4" }
            }
            input {
                r#type: "search",
                placeholder: "Search products...",
                autocomplete: "off",
                class: "w-full h-9 pl-10 pr-3 rounded-md border border-gray-300 text-sm focus:outline-none focus:border-indigo-500",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn nav_items() -> Vec<NavItem> {
        vec![
            NavItem {
                label: "Home".to_string(),
                path: "/".to_string(),
                is_active: true,
            },
            NavItem {
                label: "Products".to_string(),
                path: "/products".to_string(),
                is_active: false,
            },
        ]
    }

    #[test]
    fn test_mobile_menu_toggle_twice_closes() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    /// Header bar whose menu has been toggled `toggles` times before rendering
    #[component]
    fn ToggledHeader(toggles: usize) -> Element {
        let mut menu = use_signal(move || {
            let mut menu = MobileMenu::default();
            for _ in 0..toggles {
                menu.toggle();
            }
            menu
        });

        rsx! {
            HeaderBar {
                nav_items: nav_items(),
                on_nav_click: |_| {},
                on_logo_click: |_| {},
                cart_count: 3,
                on_cart_click: |_| {},
                user: CurrentUser {
                    username: "admin".to_string(),
                },
                on_sign_in_click: |_| {},
                menu: menu(),
                on_toggle_menu: move |_| menu.write().toggle(),
            }
        }
    }

    fn account_markers(html: &str) -> (bool, bool, bool) {
        (
            html.contains("data-testid=\"cart-badge\""),
            html.contains(">3</span>"),
            html.contains(">admin</span>"),
        )
    }

    #[test]
    fn test_open_menu_keeps_cart_count_and_user() {
        fn closed() -> Element {
            rsx! { ToggledHeader { toggles: 0 } }
        }
        fn open() -> Element {
            rsx! { ToggledHeader { toggles: 1 } }
        }

        let closed_html = render(closed);
        let open_html = render(open);

        assert!(!closed_html.contains("mobile-menu"));
        assert!(open_html.contains("mobile-menu"));
        assert_eq!(account_markers(&open_html), (true, true, true));
        assert_eq!(account_markers(&open_html), account_markers(&closed_html));
    }

    #[test]
    fn test_second_toggle_closes_menu() {
        fn app() -> Element {
            rsx! { ToggledHeader { toggles: 2 } }
        }

        let html = render(app);
        assert!(!html.contains("mobile-menu"));
        assert_eq!(account_markers(&html), (true, true, true));
    }

    #[test]
    fn test_header_starts_with_menu_closed() {
        fn app() -> Element {
            rsx! {
                HeaderView {
                    nav_items: nav_items(),
                    on_nav_click: |_| {},
                    on_logo_click: |_| {},
                    cart_count: 3,
                    on_cart_click: |_| {},
                    on_sign_in_click: |_| {},
                }
            }
        }

        let html = render(app);
        assert!(!html.contains("mobile-menu"));
        assert!(html.contains("DigitalStore"));
        assert!(html.contains("Products"));
    }

    #[test]
    fn test_cart_badge_shows_count() {
        fn app() -> Element {
            rsx! {
                HeaderView {
                    nav_items: nav_items(),
                    on_nav_click: |_| {},
                    on_logo_click: |_| {},
                    cart_count: 3,
                    on_cart_click: |_| {},
                    on_sign_in_click: |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains("cart-badge"));
        assert!(html.contains(">3</span>"));
        assert!(html.contains("Sign In"));
    }

    #[test]
    fn test_empty_cart_hides_badge() {
        fn app() -> Element {
            rsx! {
                HeaderView {
                    nav_items: nav_items(),
                    on_nav_click: |_| {},
                    on_logo_click: |_| {},
                    cart_count: 0,
                    on_cart_click: |_| {},
                    on_sign_in_click: |_| {},
                }
            }
        }

        assert!(!render(app).contains("cart-badge"));
    }

    #[test]
    fn test_signed_in_user_replaces_sign_in() {
        fn app() -> Element {
            rsx! {
                HeaderView {
                    nav_items: nav_items(),
                    on_nav_click: |_| {},
                    on_logo_click: |_| {},
                    cart_count: 0,
                    on_cart_click: |_| {},
                    user: CurrentUser {
                        username: "admin".to_string(),
                    },
                    on_sign_in_click: |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains("current-user"));
        assert!(html.contains("admin"));
        assert!(!html.contains("Sign In"));
    }
}
