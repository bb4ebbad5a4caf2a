//! Rendering markers
//!
//! Stable `data-testid` values for the structural regions of the storefront.

/// Catalog heading.
pub const CATALOG_TITLE: &str = "catalog-title";

/// Grid holding placeholders, the error region or product cards.
pub const PRODUCTS_GRID: &str = "products-grid";

/// One loading placeholder card.
pub const LOADING_CARD: &str = "loading-card";

/// Spinner inside a loading placeholder.
pub const LOADER: &str = "loader";

/// Region shown when the catalog failed to load.
pub const ERROR_MESSAGE: &str = "error-message";

/// Header button opening the cart popup.
pub const CART_BUTTON: &str = "cart-button";

/// Item count badge on the cart button.
pub const CART_BADGE: &str = "cart-badge";

/// Cart popup container.
pub const CART_POPUP: &str = "cart-popup";

/// Cart total inside the popup.
pub const CART_TOTAL: &str = "cart-total";
