//! Navigation cart badge.
//!
//! Subscribes to the cart store and reports the item count whenever it
//! changes, the way the navigation bar's badge follows cart edits made in
//! other modules.

use shophub_state::{CartStore, Shared};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

/// Spawns the badge task. It ends when every cart handle is dropped.
pub fn spawn_cart_badge(cart: &Shared<CartStore>) -> JoinHandle<()> {
    let rx = cart.subscribe();
    tokio::spawn(watch_cart_badge(rx, |count| {
        info!(total_items = count, "Cart badge updated")
    }))
}

/// Calls `on_change` with the new total each time it differs from the last
/// one seen.
pub async fn watch_cart_badge<F>(mut rx: watch::Receiver<CartStore>, mut on_change: F)
where
    F: FnMut(u64),
{
    let mut last = rx.borrow_and_update().total_items();

    while rx.changed().await.is_ok() {
        let current = rx.borrow_and_update().total_items();
        if current != last {
            on_change(current);
            last = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_core::{CartItem, Quantity};
    use std::sync::{Arc, Mutex};

    fn test_item(product_id: &str) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            product_name: "Test Product".to_string(),
            quantity: Quantity::ONE,
            price_cents: 100,
            image: "test.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_badge_follows_cart_and_skips_unchanged_totals() {
        let cart = Shared::new(CartStore::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let task = tokio::spawn(watch_cart_badge(cart.subscribe(), move |count| {
            sink.lock().unwrap().push(count)
        }));
        tokio::task::yield_now().await;

        cart.update(|c| c.add_item(test_item("1")));
        tokio::task::yield_now().await;
        cart.update(|c| c.remove_item("missing"));
        tokio::task::yield_now().await;
        cart.update(|c| c.add_item(test_item("1")));
        tokio::task::yield_now().await;

        drop(cart);
        task.await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }
}
