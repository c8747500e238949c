//! API data transfer objects.
//!
//! Request bodies use camelCase field names, response bodies mirror the snake_case
//! column names of the underlying rows.

pub mod api;
pub mod auth;
pub mod channel;
pub mod friend;
pub mod message;
pub mod profile;
pub mod server;
