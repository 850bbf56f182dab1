//! # Validation Module
//!
//! Validation for data entering the storefront from outside.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Boundary                                │
//! │                                                                         │
//! │  Catalog source (JSON file, demo fixtures)                              │
//! │  └── THIS MODULE: validate_product per entry                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ProductStore::load_products  (no validation, total)                   │
//! │                                                                         │
//! │  Shell login command                                                    │
//! │  └── THIS MODULE: validate_user                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  AuthStore::login             (no credential check, total)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stores themselves never validate; cart quantities are guarded by the
//! [`Quantity`](crate::Quantity) type instead.

use crate::error::ValidationError;
use crate::types::{Product, User};
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Fails when `value` is empty after trimming.
fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use shophub_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Wireless Headphones").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require("name", name)?;

    if name.trim().chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use shophub_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(29999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "priceCents".to_string(),
        });
    }
    Ok(())
}

/// Minimal email shape check: one `@` with text on both sides and a dot in
/// the domain part.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    require("email", email)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .trim()
        .split_once('@')
        .ok_or_else(|| invalid("missing @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must contain exactly one @ with a local part"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a catalog entry before it is handed to the product store.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    require("id", &product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    Ok(())
}

/// Validates caller-supplied user data before login.
pub fn validate_user(user: &User) -> ValidationResult<()> {
    require("id", &user.id)?;
    require("name", &user.name)?;
    validate_email(&user.email)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price_cents,
            image: String::new(),
            category: "Electronics".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("USB-C Hub").is_ok());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&product("1", "Laptop", 99900)).is_ok());
        assert!(matches!(
            validate_product(&product("", "Laptop", 99900)),
            Err(ValidationError::Required { field }) if field == "id"
        ));
        assert!(matches!(
            validate_product(&product("1", "Laptop", -1)),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("demo@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("demo.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("demo@localhost").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_validate_user() {
        let user = User {
            id: "1".to_string(),
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
            avatar: None,
        };
        assert!(validate_user(&user).is_ok());

        let nameless = User {
            name: String::new(),
            ..user
        };
        assert!(validate_user(&nameless).is_err());
    }
}
