//! Cart Store
//!
//! Owns the cart for one session and tells registered listeners about every
//! effective mutation. Mutations that change nothing notify nobody.

use std::{fmt, sync::Arc};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    cart::{Cart, CartAction, CartEvent},
    products::{Product, ProductId},
};

new_key_type! {
    /// Listener Key
    pub struct ListenerKey;
}

/// Callback run after each effective mutation with the event and the new cart.
pub type Listener = Arc<dyn Fn(&CartEvent, &Cart) + Send + Sync>;

/// Cart plus the listeners reading it.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    listeners: SlotMap<ListenerKey, Listener>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CartStore {
    /// Create a store with an empty cart and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Register a listener.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&CartEvent, &Cart) + Send + Sync + 'static,
    ) -> ListenerKey {
        self.listeners.insert(Arc::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// See [`Cart::add_to_cart`].
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Option<CartEvent> {
        self.mutate_and_deliver(|cart| cart.add_to_cart(product, quantity))
    }

    /// See [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Option<CartEvent> {
        self.mutate_and_deliver(|cart| cart.update_quantity(id, quantity))
    }

    /// See [`Cart::remove_from_cart`].
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartEvent> {
        self.mutate_and_deliver(|cart| cart.remove_from_cart(id))
    }

    /// See [`Cart::clear_cart`].
    pub fn clear_cart(&mut self) -> Option<CartEvent> {
        self.mutate_and_deliver(Cart::clear_cart)
    }

    /// See [`Cart::apply`].
    pub fn dispatch(&mut self, action: CartAction) -> Option<CartEvent> {
        self.mutate_and_deliver(|cart| cart.apply(action))
    }

    fn mutate_and_deliver(
        &mut self,
        mutation: impl FnOnce(&mut Cart) -> Option<CartEvent>,
    ) -> Option<CartEvent> {
        let notification = self.mutate(mutation);

        notification.deliver(|| self.cart.clone())
    }

    /// Run a mutation and collect the listeners it owes a call.
    ///
    /// The calls are made by [`Notification::deliver`], which the shared
    /// handle runs after releasing its lock.
    pub(super) fn mutate(
        &mut self,
        mutation: impl FnOnce(&mut Cart) -> Option<CartEvent>,
    ) -> Notification {
        let Some(event) = mutation(&mut self.cart) else {
            return Notification::default();
        };

        debug!(
            ?event,
            lines = self.cart.len(),
            item_count = self.cart.item_count(),
            "cart updated"
        );

        Notification {
            event: Some(event),
            listeners: self.listeners.values().cloned().collect(),
        }
    }
}

/// Listener calls owed for one mutation.
#[must_use]
#[derive(Default)]
pub(super) struct Notification {
    event: Option<CartEvent>,
    listeners: SmallVec<[Listener; 4]>,
}

impl Notification {
    /// Call every listener and hand back the event.
    ///
    /// Each listener gets the cart as it is when called, read through
    /// `current`. A listener may mutate the cart and trigger a nested
    /// delivery, after which the state this mutation left is already stale.
    pub(super) fn deliver(self, current: impl Fn() -> Cart) -> Option<CartEvent> {
        if let Some(event) = &self.event {
            for listener in &self.listeners {
                let cart = current();

                listener(event, &cart);
            }
        }

        self.event
    }
}
