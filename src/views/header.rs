//! Header
//!
//! The header's cart button shows a badge with the total number of units in
//! the cart. The badge is hidden while the cart is empty.

use crate::cart::Cart;

/// Cart button badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartBadge {
    item_count: u64,
}

impl CartBadge {
    /// Badge for the cart's current contents.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            item_count: cart.item_count(),
        }
    }

    /// Total units in the cart.
    pub fn item_count(self) -> u64 {
        self.item_count
    }

    /// Check if the badge should be shown.
    pub fn is_visible(self) -> bool {
        self.item_count > 0
    }

    /// Badge text, or `None` when hidden.
    pub fn label(self) -> Option<String> {
        self.is_visible().then(|| self.item_count.to_string())
    }
}

impl From<&Cart> for CartBadge {
    fn from(cart: &Cart) -> Self {
        Self::from_cart(cart)
    }
}
