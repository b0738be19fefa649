//! Order record using decimal arithmetic for totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderId, UserId};

/// An order as served by the order service.
///
/// `user_id` refers to a user by convention only. Nothing checks that the
/// user exists; the services never talk to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Order total in the currency's standard unit.
    ///
    /// Held as a `Decimal` and written to JSON as a number, so `250.50`
    /// goes out as `250.5`.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Order {
    /// Create a new order.
    #[must_use]
    pub const fn new(id: i32, user_id: i32, total: Decimal) -> Self {
        Self {
            id: OrderId::new(id),
            user_id: UserId::new(user_id),
            total,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_order_total_is_json_number() {
        let order = Order::new(101, 1, dec!(250.50));
        let value = serde_json::to_value(order).unwrap();
        assert_eq!(value, json!({"id": 101, "user_id": 1, "total": 250.5}));
        assert!(value["total"].is_f64());
    }

    #[test]
    fn test_order_total_keeps_fraction() {
        let order = Order::new(103, 3, dec!(99.99));
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"id":103,"user_id":3,"total":99.99}"#);
    }

    #[test]
    fn test_order_user_id_is_not_validated() {
        let value: Value = serde_json::to_value(Order::new(1, 999, dec!(1))).unwrap();
        assert_eq!(value["user_id"], 999);
    }
}
