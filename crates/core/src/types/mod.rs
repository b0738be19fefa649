//! Core types shared by the services.
//!
//! This module provides type-safe wrappers and the records served as JSON.

pub mod id;
pub mod order;
pub mod status;
pub mod user;

pub use id::*;
pub use order::Order;
pub use status::StatusMessage;
pub use user::User;
