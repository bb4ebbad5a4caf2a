//! Cart
//!
//! A cart holds at most one line per product, kept in insertion order. The
//! total and item count are derived from the lines on every read and are never
//! stored. A line never survives with a quantity below one: mutations that
//! would take it there remove the line instead.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    pricing,
    products::{DisplayName, Product, ProductId},
};

pub mod handle;
pub mod store;

pub use handle::CartHandle;
pub use store::{CartStore, Listener, ListenerKey};

/// A single cart line.
///
/// Name, price and image are copied from the product when the line is
/// created and are not refreshed by later additions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    id: ProductId,
    name: String,
    price: Decimal,
    image: String,
    quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Product identifier of this line.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Product name captured when the line was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name split into title and weight.
    pub fn display_name(&self) -> DisplayName<'_> {
        DisplayName::parse(&self.name)
    }

    /// Unit price captured when the line was created.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Image URI captured when the line was created.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        pricing::line_total(self.price, self.quantity)
    }
}

/// Effective change made by a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended.
    Added {
        /// Product identifier
        id: ProductId,
        /// Quantity of the new line
        quantity: u32,
    },

    /// The quantity of an existing line changed.
    Updated {
        /// Product identifier
        id: ProductId,
        /// Quantity after the change
        quantity: u32,
    },

    /// A line was removed.
    Removed {
        /// Product identifier
        id: ProductId,
    },

    /// Every line was removed.
    Cleared,
}

/// Mutations issued from the cart summary, resolved against the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// One more unit of the line.
    Increment(ProductId),

    /// One fewer unit of the line; removes it at quantity one.
    Decrement(ProductId),

    /// Remove the line.
    Remove(ProductId),

    /// Remove every line.
    Clear,
}

/// Cart contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Quantities below one are ignored. If the product already has a line,
    /// its quantity is increased and the stored name, price and image are left
    /// untouched.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Option<CartEvent> {
        let quantity = positive_quantity(quantity)?;

        if let Some(line) = self.line_mut(product.id) {
            let updated = line.quantity.saturating_add(quantity);

            if updated == line.quantity {
                return None;
            }

            line.quantity = updated;

            return Some(CartEvent::Updated {
                id: line.id,
                quantity: updated,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));

        Some(CartEvent::Added {
            id: product.id,
            quantity,
        })
    }

    /// Set the quantity of the line for `id`.
    ///
    /// Quantities below one remove the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Option<CartEvent> {
        let Some(quantity) = positive_quantity(quantity) else {
            return self.remove_from_cart(id);
        };

        let line = self.line_mut(id)?;

        if line.quantity == quantity {
            return None;
        }

        line.quantity = quantity;

        Some(CartEvent::Updated { id, quantity })
    }

    /// Remove the line for `id`, if present.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartEvent> {
        let position = self.lines.iter().position(|line| line.id == id)?;

        self.lines.remove(position);

        Some(CartEvent::Removed { id })
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) -> Option<CartEvent> {
        if self.lines.is_empty() {
            return None;
        }

        self.lines.clear();

        Some(CartEvent::Cleared)
    }

    /// Apply a summary action.
    pub fn apply(&mut self, action: CartAction) -> Option<CartEvent> {
        match action {
            CartAction::Increment(id) => {
                let quantity = self.quantity_of(id)?;

                self.update_quantity(id, i64::from(quantity).saturating_add(1))
            }
            CartAction::Decrement(id) => {
                let quantity = self.quantity_of(id)?;

                self.update_quantity(id, i64::from(quantity).saturating_sub(1))
            }
            CartAction::Remove(id) => self.remove_from_cart(id),
            CartAction::Clear => self.clear_cart(),
        }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Quantity of the line for a product.
    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.get(id).map(CartLine::quantity)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total()))
    }

    /// The total as money in the store currency.
    ///
    /// Returns `None` if the total cannot be expressed in minor units.
    pub fn total_money(&self) -> Option<Money<'static, Currency>> {
        pricing::to_money(self.total())
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Quantities arrive signed; anything below one is not a quantity.
fn positive_quantity(quantity: i64) -> Option<u32> {
    if quantity < 1 {
        return None;
    }

    Some(u32::try_from(quantity).unwrap_or(u32::MAX))
}
