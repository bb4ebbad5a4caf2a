//! Catalog Errors

use thiserror::Error;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the body could not be read.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code.
    #[error("catalog endpoint returned status {0}")]
    Status(u16),

    /// The body was not a JSON array of products.
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}
