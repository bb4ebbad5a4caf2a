//! Product card with a local quantity selector.

use leptos::prelude::*;
use storefront::{
    products::Product,
    views::product_card::{
        ADD_TO_CART_LABEL, ProductCardModel, QuantitySelector, add_selected,
    },
};

use crate::cart::use_cart;

/// One catalog product.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let handle = use_cart().handle;
    let model = ProductCardModel::from(&product);
    let selector = RwSignal::new(QuantitySelector::new());

    view! {
        <div class="product-card">
            <img class="product-image" src=model.image alt=model.alt />
            <div class="product-name">
                <p class="product-title">{model.title}</p>
                <p class="product-weight">{model.weight.unwrap_or_default()}</p>
            </div>
            <div class="product-quantity">
                <button
                    type="button"
                    aria-label="Decrease quantity"
                    disabled=move || !selector.get().can_decrement()
                    on:click=move |_| selector.update(QuantitySelector::decrement)
                >
                    "-"
                </button>
                <span>{move || selector.get().value()}</span>
                <button
                    type="button"
                    aria-label="Increase quantity"
                    on:click=move |_| selector.update(QuantitySelector::increment)
                >
                    "+"
                </button>
            </div>
            <p class="product-price">{model.price}</p>
            <button
                type="button"
                class="add-to-cart"
                on:click=move |_| {
                    let mut current = selector.get_untracked();

                    add_selected(&handle, &product, &mut current);
                    selector.set(current);
                }
            >
                {ADD_TO_CART_LABEL}
            </button>
        </div>
    }
}
