//! Authorization and membership policy.
//!
//! Pure resolvers with no I/O. Services load the rows a decision needs, build a
//! [`Viewer`] and ask the resolvers here, so every rule can be tested without a database.
//!
//! - `visibility` - which channels a viewer may see
//! - `permission` - whether a viewer holds a permission flag in a server
//! - `friendship` - friend request and accept transitions
//! - `reaction` - per-message reaction counts
//! - `responder` - whether a message triggers an automatic reply

pub mod friendship;
pub mod permission;
pub mod reaction;
pub mod responder;
pub mod visibility;

use uuid::Uuid;

use crate::server::model::server::{Server, ServerRole};

/// The caller's standing in one server.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub profile_id: Uuid,
    pub is_owner: bool,
    pub membership: Option<Membership>,
}

/// A membership row together with every role it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub member_id: Uuid,
    pub roles: Vec<ServerRole>,
}

impl Viewer {
    /// Builds the viewer for `profile_id` in `server`.
    ///
    /// # Arguments
    /// - `profile_id` - The caller's profile
    /// - `server` - Server the decision is about
    /// - `membership` - The caller's membership in `server`, if any
    pub fn new(profile_id: Uuid, server: &Server, membership: Option<Membership>) -> Self {
        Self {
            profile_id,
            is_owner: server.owner_id == profile_id,
            membership,
        }
    }

    /// The owner counts as a member even without a membership row.
    pub fn is_member(&self) -> bool {
        self.is_owner || self.membership.is_some()
    }

    pub fn roles(&self) -> &[ServerRole] {
        self.membership
            .as_ref()
            .map(|m| m.roles.as_slice())
            .unwrap_or(&[])
    }

    pub fn holds_role(&self, role_id: Uuid) -> bool {
        self.roles().iter().any(|role| role.id == role_id)
    }
}
