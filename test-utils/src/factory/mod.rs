//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating chat entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_profile(db).await?;
//! let server = factory::create_server(db, owner.id).await?;
//!
//! // Create with all dependencies
//! let (owner, server, member, channel) =
//!     factory::helpers::create_channel_with_dependencies(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let role = factory::server_role::ServerRoleFactory::new(db, server.id)
//!     .name("Moderator")
//!     .permissions(serde_json::json!({ "can_kick_members": true }))
//!     .build()
//!     .await?;
//! ```

pub mod channel;
pub mod friendship;
pub mod helpers;
pub mod member_role;
pub mod message;
pub mod message_reaction;
pub mod profile;
pub mod server;
pub mod server_member;
pub mod server_role;

pub use channel::create_channel;
pub use friendship::create_friendship;
pub use member_role::create_member_role;
pub use message::create_message;
pub use message_reaction::create_reaction;
pub use profile::create_profile;
pub use server::create_server;
pub use server_member::create_member;
pub use server_role::create_role;
