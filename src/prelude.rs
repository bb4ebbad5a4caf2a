//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartAction, CartEvent, CartHandle, CartLine, CartStore, ListenerKey},
    catalog::{
        CatalogError, CatalogOutcome, CatalogSource, HttpCatalog, StaticCatalog, fetch_products,
        load_catalog,
    },
    config::{CatalogConfig, ConfigError, StorefrontConfig},
    pricing::{format_minor_units, format_price},
    products::{DisplayName, Product, ProductId},
    receipt::{Receipt, ReceiptError},
    views::{
        cart_summary::{CartSummary, CartSummaryRow},
        catalog_page::{CatalogPage, CatalogState},
        header::CartBadge,
        product_card::{ProductCardModel, QuantitySelector},
    },
};
