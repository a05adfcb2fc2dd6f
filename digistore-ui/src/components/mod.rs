//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod category_card;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod home;
pub mod icons;
pub mod not_found;
pub mod product_card;
pub mod stub_page;
pub mod utils;

pub use app_layout::StoreLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use category_card::CategoryCard;
pub use footer::StoreFooter;
pub use header::{HeaderBar, HeaderView, MobileMenu, NavItem};
pub use helpers::{ErrorDisplay, PageContainer};
pub use home::{CategoryGrid, FeaturedProducts, HomeView, DEFAULT_PLACEHOLDER_COUNT};
pub use icons::{
    DownloadIcon, MenuIcon, SearchIcon, ShoppingCartIcon, StarIcon, UserIcon, XIcon,
};
pub use not_found::UndefinedRouteView;
pub use product_card::{ProductCard, ProductCardSkeleton};
pub use stub_page::StubPageView;
pub use utils::{format_file_size, format_price};
