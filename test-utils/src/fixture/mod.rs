//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of pure logic, such as the
//! visibility and permission resolvers. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let role = fixture::server_role::entity_builder()
//!     .permissions(serde_json::json!({ "can_kick_members": true }))
//!     .build();
//! let channel = fixture::channel::entity_builder().private(vec![role.id]).build();
//! ```

pub mod channel;
pub mod server_role;

pub use channel::{entity as channel_entity, entity_builder as channel_entity_builder};
pub use server_role::{entity as server_role_entity, entity_builder as server_role_entity_builder};
