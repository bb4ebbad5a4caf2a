//! Catalog Page
//!
//! Drives one catalog fetch per page and tracks what the product grid shows:
//! placeholders while pending, an error region on failure, otherwise one card
//! per product. A failed fetch and an empty catalog are different states.

use tracing::debug;

use crate::{
    catalog::{CatalogOutcome, CatalogSource, load_catalog},
    config::StorefrontConfig,
    products::Product,
};

/// Page heading.
pub const CATALOG_HEADING: &str = "Catalog";

/// Message shown in the error region.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

/// What the product grid currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    /// Fetch pending; placeholders are shown.
    Loading,

    /// Fetch succeeded; one card per product, possibly none.
    Loaded(Vec<Product>),

    /// Fetch failed; the error region is shown.
    Failed(String),
}

/// Catalog page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    state: CatalogState,
    placeholders: usize,
    fetch_started: bool,
}

impl CatalogPage {
    /// Create a page that shows `placeholders` loading cards until resolved.
    pub fn new(placeholders: usize) -> Self {
        Self {
            state: CatalogState::Loading,
            placeholders,
            fetch_started: false,
        }
    }

    /// Create a page using the configured placeholder count.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.placeholders)
    }

    /// Claim the page's single fetch.
    ///
    /// Returns `true` the first time only; later triggers are ignored.
    pub fn begin(&mut self) -> bool {
        if self.fetch_started {
            debug!("catalog fetch already started, ignoring trigger");

            return false;
        }

        self.fetch_started = true;

        true
    }

    /// Record the fetch result. Ignored unless the page is still loading.
    pub fn resolve(&mut self, outcome: CatalogOutcome) -> bool {
        if !self.is_loading() {
            return false;
        }

        self.state = match outcome {
            CatalogOutcome::Loaded(products) => CatalogState::Loaded(products),
            CatalogOutcome::Failed(_) => CatalogState::Failed(LOAD_FAILED_MESSAGE.to_string()),
        };

        true
    }

    /// Run the page's fetch against `source`, if it has not run yet.
    pub async fn load<S: CatalogSource>(&mut self, source: &S) -> bool {
        if !self.begin() {
            return false;
        }

        let outcome = load_catalog(source).await;

        self.resolve(outcome)
    }

    /// Current grid state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Check if the fetch is still pending.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, CatalogState::Loading)
    }

    /// Number of placeholder cards to render right now.
    pub fn placeholders(&self) -> usize {
        if self.is_loading() {
            self.placeholders
        } else {
            0
        }
    }

    /// Loaded products; empty while loading or after a failure.
    pub fn products(&self) -> &[Product] {
        match &self.state {
            CatalogState::Loaded(products) => products,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    /// Error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CatalogState::Failed(message) => Some(message),
            CatalogState::Loading | CatalogState::Loaded(_) => None,
        }
    }
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::from_config(&StorefrontConfig::default())
    }
}
