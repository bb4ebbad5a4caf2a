//! Session cart bound to Leptos reactivity.

use leptos::prelude::*;
use storefront::cart::{Cart, CartHandle};

/// Cart shared by every view of the session.
#[derive(Debug, Clone)]
pub struct CartContext {
    /// Handle used for mutations.
    pub handle: CartHandle,

    /// Latest cart, updated after every effective mutation.
    pub cart: ReadSignal<Cart>,
}

impl CartContext {
    /// Create an empty cart and mirror it into a signal.
    pub fn new() -> Self {
        let handle = CartHandle::new();
        let cart = RwSignal::new(handle.snapshot());

        handle.subscribe(move |_, latest| cart.set(latest.clone()));

        Self {
            handle,
            cart: cart.read_only(),
        }
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the session cart and make it available to descendants.
pub fn provide_cart() -> CartContext {
    let context = CartContext::new();

    provide_context(context.clone());

    context
}

/// Session cart. Panics when called outside the tree under [`provide_cart`].
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}
