//! # App Stores
//!
//! The one set of stores a running storefront owns.
//!
//! ## Why Separate Stores?
//! Instead of one big state struct, each concern gets its own handle:
//!
//! 1. **Leaf stores**: no store reads another
//! 2. **Clear consumers**: a module clones only the handle it needs
//! 3. **Independent notifications**: a cart change does not wake the profile
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppStores (built once at startup)                    │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐       │
//! │  │ products         │  │ cart             │  │ auth             │       │
//! │  │ Shared<Product-  │  │ Shared<Cart-     │  │ Shared<Auth-     │       │
//! │  │        Store>    │  │        Store>    │  │        Store>    │       │
//! │  └────────┬─────────┘  └────────┬─────────┘  └────────┬─────────┘       │
//! │           │                     │                     │                 │
//! │     product list          cart module,          profile module,         │
//! │                           navigation badge      navigation              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global instance. The shell constructs `AppStores` and passes
//! clones to whatever needs them.

use crate::{AuthStore, CartStore, ProductStore, Shared};

#[derive(Debug, Clone, Default)]
pub struct AppStores {
    pub products: Shared<ProductStore>,
    pub cart: Shared<CartStore>,
    pub auth: Shared<AuthStore>,
}

impl AppStores {
    /// Creates empty stores: no catalog, empty cart, nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_core::User;

    #[test]
    fn test_new_stores_are_empty() {
        let stores = AppStores::new();
        assert_eq!(stores.products.read(|p| p.product_count()), 0);
        assert!(stores.cart.read(|c| c.is_empty()));
        assert!(!stores.auth.read(|a| a.is_authenticated()));
    }

    #[test]
    fn test_cloned_app_stores_share_every_store() {
        let stores = AppStores::new();
        let injected = stores.clone();

        injected.auth.update(|a| {
            a.login(User {
                id: "1".to_string(),
                email: "demo@example.com".to_string(),
                name: "Demo User".to_string(),
                avatar: None,
            })
        });

        assert_eq!(stores.auth.read(|a| a.user_name().to_string()), "Demo User");
    }
}
