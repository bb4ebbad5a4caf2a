//! Catalog
//!
//! Loads the product list. Each load makes exactly one call to its source;
//! there is no retry, caching or pagination.

use tracing::{error, info, instrument};

use crate::products::Product;

mod errors;
mod http;

pub use errors::CatalogError;
pub use http::HttpCatalog;

/// Where the product list comes from.
pub trait CatalogSource {
    /// Fetch every product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the products could not be fetched or decoded.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// A source backed by products already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Create a source that always returns `products`.
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        Self {
            products: products.into(),
        }
    }
}

impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// Result of one catalog load.
///
/// Unlike [`fetch_products`], a failed load stays distinguishable from an
/// empty catalog.
#[derive(Debug)]
pub enum CatalogOutcome {
    /// The source returned a product list, possibly empty.
    Loaded(Vec<Product>),

    /// The source failed.
    Failed(CatalogError),
}

impl CatalogOutcome {
    /// Check if the load failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The products, or an empty list if the load failed.
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Loaded(products) => products,
            Self::Failed(_) => Vec::new(),
        }
    }
}

impl From<Result<Vec<Product>, CatalogError>> for CatalogOutcome {
    fn from(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self::Loaded(products),
            Err(error) => Self::Failed(error),
        }
    }
}

/// Load the catalog once, keeping failures visible to the caller.
///
/// Failures are logged here; the caller decides how to present them.
#[instrument(name = "catalog.load", skip(source))]
pub async fn load_catalog<S: CatalogSource>(source: &S) -> CatalogOutcome {
    let outcome = CatalogOutcome::from(source.fetch_products().await);

    match &outcome {
        CatalogOutcome::Loaded(products) => info!(products = products.len(), "catalog loaded"),
        CatalogOutcome::Failed(failure) => error!(error = %failure, "catalog load failed"),
    }

    outcome
}

/// Fetch the product list, degrading any failure to an empty list.
pub async fn fetch_products<S: CatalogSource>(source: &S) -> Vec<Product> {
    load_catalog(source).await.into_products()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    /// Counts calls and fails every one of them.
    #[derive(Debug, Default)]
    struct BrokenCatalog {
        calls: Cell<usize>,
    }

    impl CatalogSource for BrokenCatalog {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.calls.set(self.calls.get() + 1);

            Err(CatalogError::Status(503))
        }
    }

    fn onion() -> Product {
        Product {
            id: ProductId(12),
            name: "Onion - 1 Kg".to_string(),
            price: Decimal::from(16),
            image: "onion.jpg".to_string(),
            category: Some("vegetables".to_string()),
        }
    }

    #[tokio::test]
    async fn static_catalog_loads_its_products() -> TestResult {
        let source = StaticCatalog::new([onion()]);

        let outcome = load_catalog(&source).await;

        let CatalogOutcome::Loaded(products) = outcome else {
            return Err("expected a loaded catalog".into());
        };

        assert_eq!(products, vec![onion()]);

        Ok(())
    }

    #[tokio::test]
    async fn failed_load_is_reported_as_failed() {
        let source = BrokenCatalog::default();

        let outcome = load_catalog(&source).await;

        assert!(outcome.is_failed());
        assert!(matches!(
            outcome,
            CatalogOutcome::Failed(CatalogError::Status(503))
        ));
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn fetch_products_degrades_to_empty_list() {
        let source = BrokenCatalog::default();

        let products = fetch_products(&source).await;

        assert!(products.is_empty());
        assert_eq!(source.calls.get(), 1, "exactly one call, no retry");
    }

    #[tokio::test]
    async fn empty_catalog_is_not_a_failure() {
        let outcome = load_catalog(&StaticCatalog::default()).await;

        assert!(!outcome.is_failed());
        assert!(outcome.into_products().is_empty());
    }
}
