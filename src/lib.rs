//! Storefront
//!
//! Client-side core of a grocery storefront: a session cart with change
//! notifications, a catalog loader for a remote JSON endpoint, and the view
//! models the web front end renders.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod views;
