//! Common helper UI components

mod error_display;
mod page_container;

pub use error_display::ErrorDisplay;
pub use page_container::PageContainer;
