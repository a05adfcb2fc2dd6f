//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. Pages
//! in the web crate write to them; views only read.

pub mod home;

pub use home::*;
