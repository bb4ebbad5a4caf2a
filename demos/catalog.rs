//! Catalog Example
//!
//! Loads the catalog, fills a cart and prints its receipt.
//!
//! Use `-c` to read a storefront YAML config
//! Use `-u` to override the catalog URL
//! Use `--offline` to load the bundled catalog instead of the remote endpoint
//! Use `-n` to set how many products to add, and `-q` the quantity of each

use std::{io, io::Write, path::PathBuf, time::Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing_subscriber::EnvFilter;

use storefront::{
    cart::CartHandle,
    catalog::HttpCatalog,
    config::StorefrontConfig,
    fixtures::sample_source,
    receipt::Receipt,
    views::{
        catalog_page::{CatalogPage, CatalogState},
        header::CartBadge,
    },
};

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

/// Arguments for the catalog example
#[derive(Debug, Parser)]
struct Args {
    /// Storefront YAML config
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Catalog URL, overriding the config
    #[clap(short, long)]
    url: Option<String>,

    /// Use the bundled catalog
    #[clap(long)]
    offline: bool,

    /// Number of products to add to the cart
    #[clap(short, default_value_t = 5)]
    n: usize,

    /// Quantity of each product
    #[clap(short, long, default_value_t = 1)]
    quantity: i64,

    /// Log output format
    #[clap(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

fn init_logging(config: &StorefrontConfig, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    _ = match format {
        LogFormat::Compact => builder.compact().with_target(true).try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    };
}

/// Catalog Example
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StorefrontConfig::from_path(path)?,
        None => StorefrontConfig::default(),
    };

    if let Some(url) = args.url {
        config.catalog.url = url;
    }

    config.validate()?;

    init_logging(&config, args.log_format);

    let mut page = CatalogPage::from_config(&config);

    let start = Instant::now();

    if args.offline {
        page.load(&sample_source()?).await;
    } else {
        page.load(&HttpCatalog::new(&config.catalog)).await;
    }

    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let products = match page.state() {
        CatalogState::Loaded(products) => products,
        CatalogState::Failed(message) => {
            writeln!(handle, "Error: {message}")?;

            return Ok(());
        }
        CatalogState::Loading => return Ok(()),
    };

    writeln!(
        handle,
        "Loaded {} products in {} ({}s)",
        products.len(),
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    let cart = CartHandle::new();

    for product in products.iter().take(args.n) {
        cart.add_to_cart(product, args.quantity);
    }

    Receipt::from_cart(&cart.snapshot()).write_to(&mut handle)?;

    if let Some(badge) = CartBadge::from(&cart.snapshot()).label() {
        writeln!(handle, "\nCart badge: {badge}")?;
    }

    Ok(())
}
