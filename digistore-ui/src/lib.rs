//! digistore-ui - Display types, stores and pure view components for the storefront
//!
//! Views here never fetch data or touch the router. Pages in the web crate
//! own the I/O and pass state and callbacks down.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
