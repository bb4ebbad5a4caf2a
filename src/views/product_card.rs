//! Product Card
//!
//! Each card keeps a local quantity selector. Adding to the cart sends the
//! selected quantity and resets the selector to one.

use crate::{
    cart::{CartEvent, CartHandle},
    pricing::format_price,
    products::{Product, ProductId},
};

/// Label on the add button.
pub const ADD_TO_CART_LABEL: &str = "Add to cart";

/// Local per-card quantity, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: u32,
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl QuantitySelector {
    /// Create a selector at one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected quantity.
    pub fn value(self) -> u32 {
        self.value
    }

    /// Select one more.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Select one fewer, stopping at one.
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1).max(1);
    }

    /// Check if the decrement control should be enabled.
    pub fn can_decrement(self) -> bool {
        self.value > 1
    }

    /// Hand out the selected quantity and reset to one.
    pub fn take(&mut self) -> u32 {
        std::mem::take(self).value
    }
}

/// Display data for one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardModel {
    /// Product identifier
    pub id: ProductId,

    /// Name before the hyphen
    pub title: String,

    /// Name after the hyphen, if any
    pub weight: Option<String>,

    /// Formatted unit price
    pub price: String,

    /// Image URI
    pub image: String,

    /// Image alternative text
    pub alt: String,
}

impl From<&Product> for ProductCardModel {
    fn from(product: &Product) -> Self {
        let name = product.display_name();

        Self {
            id: product.id,
            title: name.title.to_string(),
            weight: name.weight.map(str::to_string),
            price: format_price(product.price),
            image: product.image.clone(),
            alt: name.title.to_string(),
        }
    }
}

/// Add the selected quantity of `product` to the cart and reset the selector.
pub fn add_selected(
    cart: &CartHandle,
    product: &Product,
    selector: &mut QuantitySelector,
) -> Option<CartEvent> {
    let quantity = selector.take();

    cart.add_to_cart(product, i64::from(quantity))
}
