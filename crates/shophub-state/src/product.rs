//! # Product Store
//!
//! Holds the catalog the product list renders.
//!
//! ## Read Surfaces
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  State                         Derived (recomputed on every read)      │
//! │  ─────                         ─────────────────────────────────────   │
//! │  products  ──┬───────────────► product_count()   "6 products"          │
//! │              │                                                          │
//! │  filter ─────┴───────────────► filtered_products() / visible_count()  │
//! │                                                                         │
//! │  loading, selected_product     read as-is                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shophub_core::Product;
use tracing::debug;

/// Catalog state: products, loading flag, text filter and selection.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStore {
    products: Vec<Product>,
    loading: bool,
    selected_product: Option<Product>,
    filter: String,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replaces the catalog wholesale and clears the loading flag.
    ///
    /// Duplicate ids are not rejected; [`product_by_id`](Self::product_by_id)
    /// returns the last one.
    pub fn load_products(&mut self, products: Vec<Product>) {
        debug!(count = products.len(), "load_products");
        self.products = products;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        debug!(loading, "set_loading");
        self.loading = loading;
    }

    /// Stores the filter verbatim. Case folding happens at read time.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        debug!(filter = %self.filter, "set_filter");
    }

    /// Sets or clears the selected product.
    pub fn select_product(&mut self, product: Option<Product>) {
        debug!(product_id = ?product.as_ref().map(|p| &p.id), "select_product");
        self.selected_product = product;
    }

    /// Appends one product to the catalog.
    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = %product.id, "add_product");
        self.products.push(product);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The full catalog in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    /// Products whose name or category contains the filter, ignoring case.
    ///
    /// An empty filter yields the whole catalog in its original order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        if self.filter.is_empty() {
            return self.products.iter().collect();
        }

        let needle = self.filter.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_filter(&needle))
            .collect()
    }

    /// Total catalog size, independent of the filter.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of products the current filter lets through.
    pub fn visible_count(&self) -> usize {
        self.filtered_products().len()
    }

    /// Looks up a product by id. With duplicate ids the last entry wins.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().rev().find(|p| p.id == id)
    }
}
