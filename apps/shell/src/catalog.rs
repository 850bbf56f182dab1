//! # Catalog Loading
//!
//! Feeds the product store from a catalog source.
//!
//! ## Load Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_loading(true)  ──►  "Loading products..."                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  sleep(load_delay)       simulated network latency                      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  fetch()                 demo fixtures or JSON file                     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  validate_product        invalid entries skipped with a warning         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  load_products(valid)    clears the loading flag                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::time::Duration;

use shophub_core::validation::validate_product;
use shophub_core::Product;
use shophub_state::{ProductStore, Shared};
use tracing::{info, warn};

use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::fixtures;

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Built-in demo products.
    Demo,
    /// A JSON array of products.
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_config(config: &ShellConfig) -> Self {
        match &config.catalog_path {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Demo,
        }
    }

    pub async fn fetch(&self) -> ShellResult<Vec<Product>> {
        match self {
            CatalogSource::Demo => Ok(fixtures::demo_catalog()),
            CatalogSource::File(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                parse_catalog(&raw)
            }
        }
    }
}

/// Parses a JSON array of camelCase products.
pub fn parse_catalog(raw: &str) -> ShellResult<Vec<Product>> {
    Ok(serde_json::from_str(raw)?)
}

/// Drops entries that fail validation, logging each one.
pub fn retain_valid(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| match validate_product(product) {
            Ok(()) => true,
            Err(e) => {
                warn!(product_id = %product.id, error = %e, "Skipping invalid catalog entry");
                false
            }
        })
        .collect()
}

/// Runs the load sequence against `store` and returns the number of products
/// loaded.
///
/// If the fetch fails the loading flag is cleared and the catalog is left as
/// it was.
pub async fn load_catalog(
    store: &Shared<ProductStore>,
    source: &CatalogSource,
    delay: Duration,
) -> ShellResult<usize> {
    store.update(|s| s.set_loading(true));

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let fetched = match source.fetch().await {
        Ok(products) => products,
        Err(e) => {
            store.update(|s| s.set_loading(false));
            return Err(e);
        }
    };

    let products = retain_valid(fetched);
    let count = products.len();
    store.update(|s| s.load_products(products));

    info!(count, ?source, "Catalog loaded");
    Ok(count)
}
