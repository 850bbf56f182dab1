//! # Shared Store Handle
//!
//! Lets several modules hold the same store and react to its changes.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shared<S>                                        │
//! │                                                                         │
//! │   product list ──┐                                                      │
//! │   cart module ───┼──► update(|s| s.add_item(..)) ──► watch::Sender<S>   │
//! │   navigation ────┘         (exclusive write)               │            │
//! │                                                            │ notify     │
//! │   read(|s| s.total_items())  ◄── consistent snapshot       ▼            │
//! │                                                  watch::Receiver<S>     │
//! │                                                  (badge, profile, ...)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A mutation holds the write side of the channel for its whole duration, so
//! readers see either the state before it or the state after it, never a
//! half-applied one.
//!
//! ## Re-entrancy
//! Calling `read` or `update` on the same handle from inside an `update`
//! closure deadlocks. Nesting a `read` inside another `read` on the same
//! handle can block too: the channel guards its value with a `std` `RwLock`,
//! and a writer queued between the two reads holds off the inner one.
//! Closures should only touch the state they are given.

use std::sync::Arc;

use tokio::sync::watch;

/// Cloneable handle to one store. All clones see the same state.
#[derive(Debug)]
pub struct Shared<S> {
    tx: Arc<watch::Sender<S>>,
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Shared {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<S: Default> Default for Shared<S> {
    fn default() -> Self {
        Shared::new(S::default())
    }
}

impl<S> Shared<S> {
    pub fn new(state: S) -> Self {
        // Sender::send_modify works without live receivers, so the initial
        // receiver can be dropped.
        let (tx, _rx) = watch::channel(state);
        Shared { tx: Arc::new(tx) }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use shophub_state::{CartStore, Shared};
    ///
    /// let cart = Shared::new(CartStore::new());
    /// assert!(cart.read(|c| c.is_empty()));
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.tx.borrow();
        f(&state)
    }

    /// Executes a function with write access to the store, then notifies
    /// every subscriber.
    ///
    /// ## Usage
    /// ```rust
    /// use shophub_state::{CartStore, Shared};
    ///
    /// let cart = Shared::new(CartStore::new());
    /// cart.update(|c| c.clear_cart());
    /// ```
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut S) -> R,
    {
        let mut out = None;
        self.tx.send_modify(|state| out = Some(f(state)));
        out.expect("send_modify runs its closure exactly once")
    }

    /// Returns a receiver that is marked changed after every `update`.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}

impl<S: Clone> Shared<S> {
    /// Clones the current state out of the handle.
    pub fn snapshot(&self) -> S {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CartStore;
    use shophub_core::{CartItem, Quantity};

    fn test_item(product_id: &str) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            product_name: "Test Product".to_string(),
            quantity: Quantity::ONE,
            price_cents: 9999,
            image: "test.jpg".to_string(),
        }
    }

    #[test]
    fn test_clones_share_state() {
        let cart = Shared::new(CartStore::new());
        let other_module = cart.clone();

        cart.update(|c| c.add_item(test_item("1")));

        assert_eq!(other_module.read(|c| c.total_items()), 1);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let cart = Shared::new(CartStore::new());
        let lines = cart.update(|c| {
            c.add_item(test_item("1"));
            c.add_item(test_item("2"));
            c.line_count()
        });
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let cart = Shared::new(CartStore::new());
        cart.update(|c| c.add_item(test_item("1")));

        let before = cart.snapshot();
        cart.update(|c| c.clear_cart());

        assert_eq!(before.line_count(), 1);
        assert!(cart.read(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_subscriber_sees_each_update() {
        let cart = Shared::new(CartStore::new());
        let mut rx = cart.subscribe();
        assert!(!rx.has_changed().unwrap());

        cart.update(|c| c.add_item(test_item("1")));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().total_items(), 1);

        cart.update(|c| c.update_quantity("1", 4));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().total_items(), 4);
    }
}
