//! # Domain Types
//!
//! Core domain types shared by every storefront module.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  product_id     │   │  id             │       │
//! │  │  name           │   │  product_name   │   │  email          │       │
//! │  │  price_cents    │   │  quantity (≥1)  │   │  name           │       │
//! │  │  category       │   │  price_cents    │   │  avatar?        │       │
//! │  │  in_stock       │   └────────┬────────┘   └────────┬────────┘       │
//! │  └─────────────────┘            │                     │                 │
//! │                                 ▼                     ▼                 │
//! │                        ┌─────────────────────────────────────┐         │
//! │                        │ Order (read-only history)           │         │
//! │                        │ user_id, items, total, status       │         │
//! │                        └─────────────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize to camelCase JSON so the front-end modules read the
//! same field names they always have (`productId`, `inStock`, ...).

use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::GUEST_NAME;

// =============================================================================
// Quantity
// =============================================================================

/// A strictly positive cart line quantity.
///
/// There is no zero `Quantity`: a line whose quantity would drop to zero or
/// below is removed from the cart instead of being stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Returns `None` for `n <= 0`. Values above `u32::MAX` saturate.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::Quantity;
    ///
    /// assert_eq!(Quantity::new(3).map(Quantity::get), Some(3));
    /// assert!(Quantity::new(0).is_none());
    /// assert!(Quantity::new(-1).is_none());
    /// ```
    pub fn new(n: i64) -> Option<Self> {
        if n <= 0 {
            return None;
        }
        let clamped = u32::try_from(n).unwrap_or(u32::MAX);
        NonZeroU32::new(clamped).map(Quantity)
    }

    /// Returns the quantity as a plain integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Adds two quantities, saturating at `u32::MAX`.
    #[inline]
    pub const fn saturating_add(self, other: Quantity) -> Self {
        Quantity(self.0.saturating_add(other.0.get()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (opaque token).
    pub id: String,

    /// Display name shown on the product card.
    pub name: String,

    pub description: String,

    /// Price in cents (smallest currency unit). Never negative once validated.
    pub price_cents: i64,

    /// Image URI.
    pub image: String,

    pub category: String,

    /// Out-of-stock products are listed but cannot be added to the cart.
    pub in_stock: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Case-insensitive substring match on name or category.
    ///
    /// `needle` must already be lowercased; the filter is lowered once per
    /// read instead of once per product.
    pub fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }

    /// Fails with [`CoreError::OutOfStock`] when the product cannot be added
    /// to a cart.
    pub fn ensure_purchasable(&self) -> CoreResult<()> {
        if self.in_stock {
            Ok(())
        } else {
            Err(CoreError::OutOfStock(self.id.clone()))
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One cart line, keyed by product id.
///
/// Uses the snapshot pattern: name, unit price and image are frozen when the
/// line is first added. Later catalog changes do not reprice the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// References `Product::id` (not enforced).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub product_name: String,

    #[ts(type = "number")]
    pub quantity: Quantity,

    /// Unit price in cents at time of adding (frozen).
    pub price_cents: i64,

    pub image: String,
}

impl CartItem {
    /// Builds a cart line from a catalog product, freezing its price.
    pub fn from_product(product: &Product, quantity: Quantity) -> Self {
        CartItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            price_cents: product.price_cents,
            image: product.image.clone(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Avatar image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avatar: Option<String>,
}

impl User {
    /// Uppercased first letter of the name, used for the avatar badge.
    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// Uppercased first character of `name`, or the guest initial when empty.
pub fn initial_of(name: &str) -> char {
    name.chars()
        .next()
        .or_else(|| GUEST_NAME.chars().next())
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('G')
}

/// Partial update for [`User`]. Only `Some` fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[ts(optional)]
    pub id: Option<String>,
    #[ts(optional)]
    pub email: Option<String>,
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(optional)]
    pub avatar: Option<String>,
}

impl UserPatch {
    /// Merges the present fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(id) = self.id {
            user.id = id;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.email.is_none() && self.name.is_none() && self.avatar.is_none()
    }
}

// =============================================================================
// Order
// =============================================================================

/// Fulfilment status of a past order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A past order shown in the profile history. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total_cents: i64,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the recorded total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
