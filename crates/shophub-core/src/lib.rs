//! # shophub-core: Pure Domain Types for the ShopHub Storefront
//!
//! This crate holds the shapes every storefront module agrees on: the
//! catalog product, the cart line, the signed-in user and the order history
//! entry. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopHub Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Front-end modules (shell, cart, profile)             │   │
//! │  │    Product List ──► Cart View ──► Profile / Order History       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads derived values, calls mutators   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                shophub-state (Product/Cart/Auth)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shophub-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ CoreError │  │  catalog  │  │   │
//! │  │   │ CartItem  │  │           │  │           │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, Quantity, User, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Validation applied where data enters the storefront
//!
//! ## Design Principles
//!
//! 1. **Unrepresentable States**: a cart line cannot hold a zero quantity
//! 2. **No I/O**: file system and network access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//!
//! ## Example Usage
//!
//! ```rust
//! use shophub_core::{CartItem, Money, Product, Quantity};
//!
//! let product = Product {
//!     id: "1".to_string(),
//!     name: "Wireless Headphones".to_string(),
//!     description: "Noise-cancelling".to_string(),
//!     price_cents: 29999,
//!     image: "headphones.jpg".to_string(),
//!     category: "Electronics".to_string(),
//!     in_stock: true,
//! };
//!
//! let line = CartItem::from_product(&product, Quantity::ONE);
//! assert_eq!(line.line_total(), Money::from_cents(29999));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display name used when nobody is signed in.
pub const GUEST_NAME: &str = "Guest";

/// Maximum length of a product name accepted from a catalog source.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
