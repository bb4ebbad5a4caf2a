//! Cart Summary
//!
//! Rows shown in the cart popup, derived fresh from the cart on every render.

use crate::{
    cart::{Cart, CartAction, CartLine},
    pricing::format_price,
    products::ProductId,
};

/// Message shown when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty :(";

/// One row in the cart popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryRow {
    /// Product identifier
    pub id: ProductId,

    /// Name before the hyphen
    pub title: String,

    /// Name after the hyphen, if any
    pub weight: Option<String>,

    /// Image URI
    pub image: String,

    /// Units in the cart
    pub quantity: u32,

    /// Formatted unit price times quantity
    pub line_total: String,

    /// Whether the `-` control is enabled
    pub can_decrement: bool,
}

impl CartSummaryRow {
    /// Action for the `-` control.
    ///
    /// The control is disabled at quantity one; dispatched anyway, the action
    /// removes the line.
    pub fn decrement(&self) -> CartAction {
        CartAction::Decrement(self.id)
    }

    /// Action for the `+` control.
    pub fn increment(&self) -> CartAction {
        CartAction::Increment(self.id)
    }

    /// Action for the trash control.
    pub fn remove(&self) -> CartAction {
        CartAction::Remove(self.id)
    }
}

impl From<&CartLine> for CartSummaryRow {
    fn from(line: &CartLine) -> Self {
        let name = line.display_name();

        Self {
            id: line.id(),
            title: name.title.to_string(),
            weight: name.weight.map(str::to_string),
            image: line.image().to_string(),
            quantity: line.quantity(),
            line_total: format_price(line.line_total()),
            can_decrement: line.quantity() > 1,
        }
    }
}

/// Contents of the cart popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartSummary {
    /// No lines; show [`EMPTY_CART_MESSAGE`].
    Empty,

    /// One row per line plus the formatted total.
    Lines {
        /// Rows in insertion order
        rows: Vec<CartSummaryRow>,

        /// Formatted cart total
        total: String,
    },
}

impl CartSummary {
    /// Summarise the cart's current lines.
    pub fn from_cart(cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self::Empty;
        }

        Self::Lines {
            rows: cart.iter().map(CartSummaryRow::from).collect(),
            total: format_price(cart.total()),
        }
    }

    /// Check if the summary shows the empty message.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Rows to render; empty for an empty cart.
    pub fn rows(&self) -> &[CartSummaryRow] {
        match self {
            Self::Empty => &[],
            Self::Lines { rows, .. } => rows,
        }
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self::from_cart(cart)
    }
}
