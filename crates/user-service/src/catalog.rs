//! The fixed user list served by `GET /users`.

use microservices_core::User;

/// Display name used in the root status message.
pub const SERVICE_NAME: &str = "User Service";

/// Users served by this service, in response order.
pub const USERS: [User; 3] = [
    User::new(1, "Alice"),
    User::new(2, "Bob"),
    User::new(3, "Charlie"),
];
