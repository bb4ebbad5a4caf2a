//! Cart Handle
//!
//! A cloneable handle to one session's [`CartStore`]. Every view of the
//! session holds a clone; all of them read and mutate the same cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use crate::{
    cart::{Cart, CartAction, CartEvent, CartLine, CartStore, ListenerKey},
    products::{Product, ProductId},
};

/// Shared handle to a cart store.
#[derive(Debug, Clone, Default)]
pub struct CartHandle {
    store: Arc<Mutex<CartStore>>,
}

impl CartHandle {
    /// Create a handle to a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`. Quantities below one are ignored.
    pub fn add_to_cart(&self, product: &Product, quantity: i64) -> Option<CartEvent> {
        self.mutate(|cart| cart.add_to_cart(product, quantity))
    }

    /// Set the quantity of a line; below one removes it.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) -> Option<CartEvent> {
        self.mutate(|cart| cart.update_quantity(id, quantity))
    }

    /// Remove a line, if present.
    pub fn remove_from_cart(&self, id: ProductId) -> Option<CartEvent> {
        self.mutate(|cart| cart.remove_from_cart(id))
    }

    /// Remove every line.
    pub fn clear_cart(&self) -> Option<CartEvent> {
        self.mutate(Cart::clear_cart)
    }

    /// Apply a summary action against the current cart.
    pub fn dispatch(&self, action: CartAction) -> Option<CartEvent> {
        self.mutate(|cart| cart.apply(action))
    }

    /// Register a listener for every effective mutation.
    ///
    /// Listeners run after the store is unlocked, so they may read through
    /// this handle.
    pub fn subscribe(
        &self,
        listener: impl Fn(&CartEvent, &Cart) + Send + Sync + 'static,
    ) -> ListenerKey {
        self.lock().subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&self, key: ListenerKey) -> bool {
        self.lock().unsubscribe(key)
    }

    /// Read the cart without copying it.
    pub fn with<R>(&self, read: impl FnOnce(&Cart) -> R) -> R {
        read(self.lock().cart())
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.with(Cart::clone)
    }

    /// Copy of the current lines.
    pub fn items(&self) -> Vec<CartLine> {
        self.with(|cart| cart.items().to_vec())
    }

    /// Current total.
    pub fn total(&self) -> Decimal {
        self.with(Cart::total)
    }

    /// Current item count.
    pub fn item_count(&self) -> u64 {
        self.with(Cart::item_count)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.with(Cart::is_empty)
    }

    fn mutate(&self, mutation: impl FnOnce(&mut Cart) -> Option<CartEvent>) -> Option<CartEvent> {
        let notification = self.lock().mutate(mutation);

        notification.deliver(|| self.snapshot())
    }

    /// A listener that panicked leaves the cart itself consistent, so a
    /// poisoned lock is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use testresult::TestResult;

    use super::*;

    fn melon() -> Product {
        Product {
            id: ProductId(9),
            name: "Musk Melon - 1 Kg".to_string(),
            price: Decimal::new(3600, 2),
            image: "melon.jpg".to_string(),
            category: None,
        }
    }

    #[test]
    fn clones_share_one_cart() {
        let card = CartHandle::new();
        let summary = card.clone();

        card.add_to_cart(&melon(), 2);

        assert_eq!(summary.item_count(), 2);

        summary.update_quantity(ProductId(9), 0);

        assert!(card.is_empty());
    }

    #[test]
    fn listener_may_read_through_the_handle() {
        let cart = CartHandle::new();
        let observed = Arc::new(AtomicU64::new(0));

        let reader = cart.clone();
        let sink = Arc::clone(&observed);

        cart.subscribe(move |_, _| {
            sink.store(reader.item_count(), Ordering::SeqCst);
        });

        cart.add_to_cart(&melon(), 3);

        assert_eq!(observed.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn listeners_after_a_nested_mutation_see_the_latest_cart() -> TestResult {
        let cart = CartHandle::new();
        let writer = cart.clone();

        cart.subscribe(move |event, _| {
            if matches!(event, CartEvent::Added { .. }) {
                writer.add_to_cart(&melon(), 1);
            }
        });

        let rendered = Arc::new(Mutex::new(Cart::new()));
        let sink = Arc::clone(&rendered);

        cart.subscribe(move |_, latest| {
            if let Ok(mut rendered) = sink.lock() {
                *rendered = latest.clone();
            }
        });

        cart.add_to_cart(&melon(), 1);

        let rendered = rendered.lock().map_err(|err| err.to_string())?;

        assert_eq!(cart.item_count(), 2);
        assert_eq!(rendered.item_count(), 2, "reader kept a stale cart");
        assert_eq!(*rendered, cart.snapshot());

        Ok(())
    }

    #[test]
    fn snapshot_is_detached() {
        let cart = CartHandle::new();
        cart.add_to_cart(&melon(), 1);

        let snapshot = cart.snapshot();
        cart.clear_cart();

        assert_eq!(snapshot.len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn dispatch_resolves_against_current_quantity() {
        let cart = CartHandle::new();
        cart.add_to_cart(&melon(), 2);

        cart.dispatch(CartAction::Decrement(ProductId(9)));
        cart.dispatch(CartAction::Decrement(ProductId(9)));

        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}
