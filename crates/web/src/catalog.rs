//! Catalog page: one fetch on mount, then placeholders, an error or cards.

use leptos::{prelude::*, task};
use storefront::{
    catalog::{HttpCatalog, load_catalog},
    config::StorefrontConfig,
    views::{
        catalog_page::{self, CATALOG_HEADING, CatalogState},
        markers,
    },
};

use crate::product_card::ProductCard;

#[component]
fn LoadingCard() -> impl IntoView {
    view! {
        <div class="product-card product-card-loading" data-testid={markers::LOADING_CARD}>
            <div class="loader" data-testid={markers::LOADER}></div>
        </div>
    }
}

fn render_grid(page: &catalog_page::CatalogPage) -> AnyView {
    match page.state() {
        CatalogState::Loading => (0..page.placeholders())
            .map(|_| view! { <LoadingCard /> })
            .collect_view()
            .into_any(),
        CatalogState::Failed(message) => view! {
            <div class="error-message" data-testid={markers::ERROR_MESSAGE}>
                <p>{format!("Error: {message}")}</p>
            </div>
        }
        .into_any(),
        CatalogState::Loaded(products) => products
            .iter()
            .cloned()
            .map(|product| view! { <ProductCard product=product /> })
            .collect_view()
            .into_any(),
    }
}

/// Catalog page for the configured endpoint.
#[component]
pub fn CatalogPage(config: StorefrontConfig) -> impl IntoView {
    let page = RwSignal::new(catalog_page::CatalogPage::from_config(&config));

    if page.try_update(catalog_page::CatalogPage::begin) == Some(true) {
        let source = HttpCatalog::new(&config.catalog);

        task::spawn_local(async move {
            let outcome = load_catalog(&source).await;

            page.update(|page| {
                page.resolve(outcome);
            });
        });
    }

    view! {
        <main class="storefront">
            <h1 class="catalog-title" data-testid={markers::CATALOG_TITLE}>
                {CATALOG_HEADING}
            </h1>
            <div class="products-grid" data-testid={markers::PRODUCTS_GRID}>
                {move || page.with(render_grid)}
            </div>
        </main>
    }
}
