//! Hardcoded demo data: the catalog, the demo shopper and their order history.

use chrono::{DateTime, NaiveDate, Utc};
use shophub_core::{CartItem, Order, OrderStatus, Product, Quantity, User};

fn product(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    image: &str,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        image: image.to_string(),
        category: category.to_string(),
        in_stock,
    }
}

/// The six-product demo catalog.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        product(
            "1",
            "Wireless Headphones",
            "Premium noise-cancelling wireless headphones with 30-hour battery life",
            29999,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            "Electronics",
            true,
        ),
        product(
            "2",
            "Smart Watch",
            "Fitness tracking smartwatch with heart rate monitor and GPS",
            39999,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400",
            "Electronics",
            true,
        ),
        product(
            "3",
            "Laptop Backpack",
            "Durable water-resistant backpack with padded laptop compartment",
            7999,
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400",
            "Accessories",
            true,
        ),
        product(
            "4",
            "Mechanical Keyboard",
            "RGB mechanical gaming keyboard with customizable switches",
            14999,
            "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400",
            "Electronics",
            false,
        ),
        product(
            "5",
            "Wireless Mouse",
            "Ergonomic wireless mouse with precision tracking",
            4999,
            "https://images.unsplash.com/photo-1527814050087-3793815479db?w=400",
            "Electronics",
            true,
        ),
        product(
            "6",
            "USB-C Hub",
            "7-in-1 USB-C hub with HDMI, USB 3.0, and SD card reader",
            5999,
            "https://images.unsplash.com/photo-1625948515291-69613efd103f?w=400",
            "Accessories",
            true,
        ),
    ]
}

/// The shopper signed in by a bare `login`.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        email: "demo@example.com".to_string(),
        name: "Demo User".to_string(),
        avatar: None,
    }
}

fn order_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// Past orders for the profile view, attributed to `user_id`.
pub fn demo_orders(user_id: &str) -> Vec<Order> {
    let catalog = demo_catalog();
    let line = |index: usize, quantity: i64| {
        let quantity = Quantity::new(quantity).unwrap_or(Quantity::ONE);
        catalog
            .get(index)
            .map(|p| CartItem::from_product(p, quantity))
    };

    vec![
        Order {
            id: "ORD-001".to_string(),
            user_id: user_id.to_string(),
            items: [line(0, 1)].into_iter().flatten().collect(),
            total_cents: 29999,
            status: OrderStatus::Delivered,
            created_at: order_date(2024, 11, 15),
        },
        Order {
            id: "ORD-002".to_string(),
            user_id: user_id.to_string(),
            items: [line(1, 1), line(2, 2)].into_iter().flatten().collect(),
            total_cents: 55997,
            status: OrderStatus::Shipped,
            created_at: order_date(2024, 11, 28),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_core::validation::{validate_product, validate_user};
    use shophub_core::Money;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|p| validate_product(p).is_ok()));
        assert_eq!(catalog.iter().filter(|p| !p.in_stock).count(), 1);
    }

    #[test]
    fn test_demo_user_is_valid() {
        assert!(validate_user(&demo_user()).is_ok());
    }

    #[test]
    fn test_demo_order_totals_match_lines() {
        for order in demo_orders("1") {
            let lines: Money = order.items.iter().map(CartItem::line_total).sum();
            assert_eq!(lines, order.total(), "order {}", order.id);
        }
    }

    #[test]
    fn test_demo_orders_dates_and_counts() {
        let orders = demo_orders("1");
        assert_eq!(orders[0].created_at.date_naive().to_string(), "2024-11-15");
        assert_eq!(orders[1].item_count(), 3);
        assert!(orders.iter().all(|o| o.user_id == "1"));
    }
}
