//! Microservices Core - Shared record types.
//!
//! This crate provides the types served by both HTTP services:
//! - `user-service` - Serves the fixed user list on port 8080
//! - `order-service` - Serves the fixed order list on port 8081
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no HTTP. The two services
//! never talk to each other; they only share the shape of what they serve.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, the `User` and `Order` records, and the status payload

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
