//! # shophub-state: Storefront Stores
//!
//! In-memory state shared by the storefront's front-end modules.
//!
//! ## Module Organization
//! ```text
//! shophub_state/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── product.rs      ◄─── Catalog, filter, selection
//! ├── cart.rs         ◄─── Cart lines and totals
//! ├── auth.rs         ◄─── Signed-in user
//! ├── shared.rs       ◄─── Shared<S>: cloneable, observable handle
//! └── stores.rs       ◄─── AppStores: the three handles together
//! ```
//!
//! ## Derived Values
//! Counts, totals and display names are methods computed from current state
//! on every call. Nothing derived is stored, so nothing can go stale.
//!
//! ## Example
//! ```rust
//! use shophub_core::{CartItem, Quantity};
//! use shophub_state::AppStores;
//!
//! let stores = AppStores::new();
//! stores.cart.update(|cart| {
//!     cart.add_item(CartItem {
//!         product_id: "1".to_string(),
//!         product_name: "Wireless Headphones".to_string(),
//!         quantity: Quantity::ONE,
//!         price_cents: 29999,
//!         image: "headphones.jpg".to_string(),
//!     })
//! });
//!
//! assert_eq!(stores.cart.read(|cart| cart.total_items()), 1);
//! ```

pub mod auth;
pub mod cart;
pub mod product;
pub mod shared;
pub mod stores;

pub use auth::AuthStore;
pub use cart::{CartStore, CartSummary};
pub use product::ProductStore;
pub use shared::Shared;
pub use stores::AppStores;
