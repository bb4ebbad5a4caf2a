//! Leptos Storefront Application

use leptos::prelude::*;
use storefront::config::StorefrontConfig;

mod cart;
mod cart_popup;
mod catalog;
mod header;
mod logging;
mod product_card;

const CONFIG_YAML: &str = include_str!("../storefront.yml");

/// Storefront shell: header with the cart button, then the catalog.
#[component]
fn App() -> impl IntoView {
    match StorefrontConfig::from_yaml(CONFIG_YAML) {
        Ok(config) => {
            logging::init(&config);
            tracing::info!(catalog = %config.catalog.url, "storefront starting");

            cart::provide_cart();

            view! {
                <header::Header />
                <catalog::CatalogPage config=config />
            }
            .into_any()
        }
        Err(error) => view! {
            <main class="storefront">
                <div class="error-message">
                    <p>{format!("Invalid storefront configuration: {error}")}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
