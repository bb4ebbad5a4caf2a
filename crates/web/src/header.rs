//! Header with the cart button.

use leptos::prelude::*;
use storefront::views::{header::CartBadge, markers};

use crate::{cart::use_cart, cart_popup::CartPopup};

/// Top bar; the cart button toggles the cart popup.
#[component]
pub fn Header() -> impl IntoView {
    let cart = use_cart().cart;
    let opened = RwSignal::new(false);

    view! {
        <header class="header">
            <div class="brand">
                <img src="/logo.svg" alt="logo" />
            </div>
            <button
                type="button"
                class="cart-button"
                data-testid={markers::CART_BUTTON}
                on:click=move |_| opened.update(|opened| *opened = !*opened)
            >
                {move || {
                    cart.with(CartBadge::from_cart)
                        .label()
                        .map_or_else(
                            || ().into_any(),
                            |label| {
                                view! {
                                    <span class="cart-badge" data-testid={markers::CART_BADGE}>
                                        {label}
                                    </span>
                                }
                                .into_any()
                            },
                        )
                }}
                <span>"Cart"</span>
            </button>
        </header>
        {move || {
            if opened.get() {
                view! { <CartPopup opened=opened /> }.into_any()
            } else {
                ().into_any()
            }
        }}
    }
}
