//! Integration tests for the HTTP catalog loader.
//!
//! Each test serves one canned HTTP response from a local listener and checks
//! how the loader and the catalog page react to it.

use std::net::SocketAddr;

use testresult::TestResult;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

use storefront::{
    catalog::{CatalogError, CatalogOutcome, HttpCatalog, fetch_products, load_catalog},
    fixtures::SAMPLE_CATALOG_JSON,
    products::ProductId,
    views::catalog_page::{CatalogPage, CatalogState, LOAD_FAILED_MESSAGE},
};

/// Serve `body` with `status` to the first connection, then stop.
async fn serve_once(status: &'static str, body: &'static str) -> TestResult<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut chunk = [0_u8; 1024];

        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(read) => request.extend_from_slice(chunk.get(..read).unwrap_or_default()),
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        _ = socket.write_all(response.as_bytes()).await;
        _ = socket.shutdown().await;
    });

    Ok(addr)
}

fn catalog_at(addr: SocketAddr) -> HttpCatalog {
    HttpCatalog::with_url(format!("http://{addr}/products.json"))
}

#[tokio::test]
async fn loads_products_from_endpoint() -> TestResult {
    let addr = serve_once("200 OK", SAMPLE_CATALOG_JSON).await?;

    let products = fetch_products(&catalog_at(addr)).await;

    assert_eq!(products.len(), 30);
    assert_eq!(products.first().map(|product| product.id), Some(ProductId(1)));

    Ok(())
}

#[tokio::test]
async fn server_error_is_a_failed_load() -> TestResult {
    let addr = serve_once("500 Internal Server Error", "oops").await?;

    let outcome = load_catalog(&catalog_at(addr)).await;

    assert!(
        matches!(outcome, CatalogOutcome::Failed(CatalogError::Status(500))),
        "got {outcome:?}"
    );

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_failed_load() -> TestResult {
    let addr = serve_once("200 OK", r#"{"products": "#).await?;

    let outcome = load_catalog(&catalog_at(addr)).await;

    assert!(
        matches!(outcome, CatalogOutcome::Failed(CatalogError::Decode(_))),
        "got {outcome:?}"
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_degrades_to_empty_list() -> TestResult {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    drop(listener);

    let products = fetch_products(&catalog_at(addr)).await;

    assert!(products.is_empty());

    Ok(())
}

#[tokio::test]
async fn page_shows_error_state_on_failure() -> TestResult {
    let addr = serve_once("503 Service Unavailable", "").await?;
    let mut page = CatalogPage::new(12);

    assert_eq!(page.placeholders(), 12);

    page.load(&catalog_at(addr)).await;

    assert_eq!(page.placeholders(), 0);
    assert_eq!(page.error(), Some(LOAD_FAILED_MESSAGE));
    assert!(page.products().is_empty());

    Ok(())
}

#[tokio::test]
async fn page_shows_empty_catalog_without_error() -> TestResult {
    let addr = serve_once("200 OK", "[]").await?;
    let mut page = CatalogPage::new(12);

    page.load(&catalog_at(addr)).await;

    assert_eq!(page.state(), &CatalogState::Loaded(Vec::new()));
    assert_eq!(page.error(), None);

    Ok(())
}
