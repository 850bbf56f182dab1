//! # Cart Store
//!
//! Manages the shopping cart shared by the product list, navigation badge
//! and cart module.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  User Action              Store Method            Line Change           │
//! │  ───────────              ────────────            ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ──────────► merge or push        │
//! │                                                                         │
//! │  +/- buttons ────────────► update_quantity() ───► qty = n (n ≤ 0 drops)│
//! │                                                                         │
//! │  Remove ─────────────────► remove_item() ───────► retain others        │
//! │                                                                         │
//! │  Clear ──────────────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  Badge / Summary ────────► total_items(), total_price() (read only)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these fail. Missing product ids are no-ops.

use serde::{Deserialize, Serialize};
use shophub_core::{CartItem, Money, Quantity};
use tracing::debug;
use ts_rs::TS;

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges)
/// - Every line quantity is ≥ 1, enforced by [`Quantity`]
/// - Totals are computed from `items` on every read
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line, or increases the quantity of the existing line for the
    /// same product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += `item.quantity`; the line keeps
    ///   the price it was first added at
    /// - Product not in cart: `item` is appended as-is
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(line) = self.line_mut(&item.product_id) {
            line.quantity = line.quantity.saturating_add(item.quantity);
            debug!(product_id = %item.product_id, quantity = %line.quantity, "add_item merged");
            return;
        }

        debug!(product_id = %item.product_id, quantity = %item.quantity, "add_item");
        self.items.push(item);
    }

    /// Removes the line for `product_id`. No-op when absent.
    pub fn remove_item(&mut self, product_id: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        debug!(product_id, removed = before != self.items.len(), "remove_item");
    }

    /// Sets a line's quantity in place.
    ///
    /// `quantity <= 0` removes the line. Absent products are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        let Some(quantity) = Quantity::new(quantity) else {
            self.remove_item(product_id);
            return;
        };

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
        debug!(product_id, quantity = %quantity, "update_quantity");
    }

    /// Raises a line's quantity by one.
    pub fn increment(&mut self, product_id: &str) {
        if let Some(current) = self.quantity_of(product_id) {
            self.update_quantity(product_id, i64::from(current.get()) + 1);
        }
    }

    /// Lowers a line's quantity by one; a line at 1 is removed.
    pub fn decrement(&mut self, product_id: &str) {
        if let Some(current) = self.quantity_of(product_id) {
            self.update_quantity(product_id, i64::from(current.get()) - 1);
        }
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        debug!(lines = self.items.len(), "clear_cart");
        self.items.clear();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity_of(&self, product_id: &str) -> Option<Quantity> {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map(|i| i.quantity)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }

    /// Sum of unit price × quantity over all lines. Saturates instead of
    /// overflowing on very large carts.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals snapshot for the cart module and navigation badge.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }
}

/// Cart totals summary handed to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub line_count: usize,
    pub total_items: u64,
    pub total_price_cents: i64,
    pub is_empty: bool,
}

impl From<&CartStore> for CartSummary {
    fn from(cart: &CartStore) -> Self {
        CartSummary {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price_cents: cart.total_price().cents(),
            is_empty: cart.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(product_id: &str, quantity: i64, price_cents: i64) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            product_name: format!("Product {}", product_id),
            quantity: Quantity::new(quantity).unwrap(),
            price_cents,
            image: "test.jpg".to_string(),
        }
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.items().is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, 9999));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().cents(), 9999);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, 9999));
        cart.add_item(test_item("1", 1, 9999));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity.get(), 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().cents(), 19998);
    }

    #[test]
    fn test_merge_adds_incoming_quantity_and_keeps_first_price() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 2, 1000));
        cart.add_item(test_item("1", 3, 5000));

        assert_eq!(cart.items()[0].quantity.get(), 5);
        assert_eq!(cart.items()[0].price_cents, 1000);
    }

    #[test]
    fn test_distinct_products_sum_quantities() {
        let mut cart = CartStore::new();
        for (id, qty) in [("a", 1), ("b", 4), ("c", 2), ("d", 7)] {
            cart.add_item(test_item(id, qty, 100));
        }

        assert_eq!(cart.line_count(), 4);
        assert_eq!(cart.total_items(), 14);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, 9999));
        cart.remove_item("1");

        assert_eq!(cart.line_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, 9999));
        cart.remove_item("missing");

        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_quantity_in_place() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, 9999));
        cart.add_item(test_item("2", 1, 100));
        cart.update_quantity("1", 5);

        assert_eq!(cart.items()[0].product_id, "1");
        assert_eq!(cart.items()[0].quantity.get(), 5);
        assert_eq!(cart.total_items(), 6);
        assert_eq!(cart.total_price().cents(), 49995 + 100);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0, -1] {
            let mut cart = CartStore::new();
            cart.add_item(test_item("1", 1, 9999));
            cart.add_item(test_item("2", 1, 100));

            cart.update_quantity("1", quantity);
            assert_eq!(cart.line_count(), 1);
            assert!(!cart.is_empty());

            cart.update_quantity("2", quantity);
            assert!(cart.is_empty());
        }
    }

    #[test]
    fn test_update_quantity_missing_is_noop() {
        let mut cart = CartStore::new();
        cart.update_quantity("missing", 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, 500));

        cart.increment("1");
        assert_eq!(cart.quantity_of("1").map(Quantity::get), Some(2));

        cart.decrement("1");
        cart.decrement("1");
        assert!(cart.quantity_of("1").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, 9999));
        cart.add_item(test_item("2", 2, 4999));
        cart.clear_cart();

        assert_eq!(cart.line_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price_multiple_items() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 2, 5000));
        cart.add_item(test_item("2", 3, 3000));

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), Money::from_major_minor(190, 0));
    }

    #[test]
    fn test_total_price_saturates() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 4_000_000_000, 10_000_000_000));
        assert_eq!(cart.total_price().cents(), i64::MAX);

        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 1, i64::MAX / 2 + 1));
        cart.add_item(test_item("2", 1, i64::MAX / 2 + 1));
        assert_eq!(cart.total_price().cents(), i64::MAX);
        assert!(!cart.total_price().is_negative());
    }

    #[test]
    fn test_summary() {
        let mut cart = CartStore::new();
        cart.add_item(test_item("1", 2, 5000));

        let summary = cart.summary();
        assert_eq!(
            summary,
            CartSummary {
                line_count: 1,
                total_items: 2,
                total_price_cents: 10000,
                is_empty: false,
            }
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalPriceCents"], 10000);
    }
}
