//! View models
//!
//! Headless state for each storefront view. The web crate renders these, and
//! tests drive them without a browser.

pub mod cart_summary;
pub mod catalog_page;
pub mod header;
pub mod markers;
pub mod product_card;
