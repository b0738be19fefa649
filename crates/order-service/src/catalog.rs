//! The fixed order list served by `GET /orders`.

use microservices_core::Order;
use rust_decimal_macros::dec;

/// Display name used in the root status message.
pub const SERVICE_NAME: &str = "Order Service";

/// Orders served by this service, in response order.
///
/// `user_id` values are not checked against the user service.
pub const ORDERS: [Order; 3] = [
    Order::new(101, 1, dec!(250.50)),
    Order::new(102, 2, dec!(175.25)),
    Order::new(103, 3, dec!(99.99)),
];
