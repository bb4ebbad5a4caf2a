//! Cart popup listing every cart line.

use leptos::prelude::*;
use storefront::{
    cart::CartHandle,
    views::{
        cart_summary::{CartSummary, CartSummaryRow, EMPTY_CART_MESSAGE},
        markers,
    },
};

use crate::cart::{CartContext, use_cart};

#[component]
fn CartRow(row: CartSummaryRow, handle: CartHandle) -> impl IntoView {
    let (decrement, increment, remove) = (row.decrement(), row.increment(), row.remove());
    let (on_decrement, on_increment, on_remove) = (handle.clone(), handle.clone(), handle);
    let alt = row.title.clone();

    view! {
        <li class="cart-row">
            <img src=row.image alt=alt width="60" height="60" />
            <div class="cart-row-details">
                <p class="cart-row-title">{row.title}</p>
                {row.weight.map(|weight| view! { <p class="cart-row-weight">{weight}</p> })}
                <p class="cart-row-total">{row.line_total}</p>
            </div>
            <div class="cart-row-controls">
                <button
                    type="button"
                    aria-label="Decrease quantity"
                    disabled=!row.can_decrement
                    on:click=move |_| {
                        on_decrement.dispatch(decrement);
                    }
                >
                    "-"
                </button>
                <span class="cart-row-quantity">{row.quantity}</span>
                <button
                    type="button"
                    aria-label="Increase quantity"
                    on:click=move |_| {
                        on_increment.dispatch(increment);
                    }
                >
                    "+"
                </button>
                <button
                    type="button"
                    class="cart-row-remove"
                    aria-label="Remove from cart"
                    on:click=move |_| {
                        on_remove.dispatch(remove);
                    }
                >
                    "🗑"
                </button>
            </div>
        </li>
    }
}

/// Popup shown while the header's cart button is toggled on.
#[component]
pub fn CartPopup(opened: RwSignal<bool>) -> impl IntoView {
    let CartContext { handle, cart } = use_cart();

    view! {
        <div class="cart-popup" role="dialog" data-testid={markers::CART_POPUP}>
            <button
                type="button"
                class="cart-popup-close"
                aria-label="Close cart"
                on:click=move |_| opened.set(false)
            >
                "×"
            </button>
            {move || match cart.with(CartSummary::from_cart) {
                CartSummary::Empty => view! {
                    <div class="cart-empty">
                        <img src="/cart_empty.svg" alt="" width="118" height="106" />
                        <p>{EMPTY_CART_MESSAGE}</p>
                    </div>
                }
                .into_any(),
                CartSummary::Lines { rows, total } => {
                    let clear = handle.clone();

                    view! {
                        <ul class="cart-rows">
                            {rows
                                .into_iter()
                                .map(|row| view! { <CartRow row=row handle=handle.clone() /> })
                                .collect_view()}
                        </ul>
                        <div class="cart-total" data-testid={markers::CART_TOTAL}>
                            <span>"Total:"</span>
                            <span>{total}</span>
                        </div>
                        <button
                            type="button"
                            class="cart-clear"
                            on:click=move |_| {
                                clear.clear_cart();
                            }
                        >
                            "Clear cart"
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
