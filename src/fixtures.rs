//! Fixtures
//!
//! A bundled copy of the stock catalog, in the same shape the remote endpoint
//! serves. Used by tests and by the offline demo.

use thiserror::Error;

use crate::{catalog::StaticCatalog, products::Product};

/// Raw JSON of the bundled catalog.
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// JSON parsing error
    #[error("Failed to parse catalog fixture: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the bundled catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the bundled JSON does not decode.
pub fn sample_catalog() -> Result<Vec<Product>, FixtureError> {
    Ok(serde_json::from_str(SAMPLE_CATALOG_JSON)?)
}

/// A catalog source serving the bundled catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the bundled JSON does not decode.
pub fn sample_source() -> Result<StaticCatalog, FixtureError> {
    sample_catalog().map(StaticCatalog::new)
}
