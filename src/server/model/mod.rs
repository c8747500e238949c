//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service and policy layers,
//! representing chat entities and operation parameters. Domain models are converted from
//! entity models at the repository boundary and transformed to DTOs at the controller
//! boundary, so JSON columns (role permissions, allowed roles, attachments) are parsed
//! exactly once.

pub mod channel;
pub mod friendship;
pub mod message;
pub mod profile;
pub mod server;
