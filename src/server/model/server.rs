//! Server, membership and role domain models.
//!
//! Roles carry a free-form permission document stored as a JSON object of named boolean
//! flags. `RolePermissions` wraps that document so the permission resolver can ask for a
//! flag without caring about the storage format. Only a JSON `true` grants a flag.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use crate::model::server::{RolePermissionsDto, ServerDto, ServerRoleDto};

/// Named permission flags understood by the permission resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionFlag {
    KickMembers,
    ManageChannels,
    ManageMessages,
    ManageRoles,
}

impl PermissionFlag {
    /// Every flag, in a stable order.
    pub const ALL: [PermissionFlag; 4] = [
        PermissionFlag::KickMembers,
        PermissionFlag::ManageChannels,
        PermissionFlag::ManageMessages,
        PermissionFlag::ManageRoles,
    ];

    /// Key of the flag inside a role's permission document.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionFlag::KickMembers => "can_kick_members",
            PermissionFlag::ManageChannels => "can_manage_channels",
            PermissionFlag::ManageMessages => "can_manage_messages",
            PermissionFlag::ManageRoles => "can_manage_roles",
        }
    }
}

impl fmt::Display for PermissionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission document of a role.
///
/// Unknown keys are preserved so documents written by other clients survive a round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RolePermissions(Map<String, Value>);

impl RolePermissions {
    /// Parses a stored permission document.
    ///
    /// Anything other than a JSON object grants nothing.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Builds a document granting exactly `flags`.
    pub fn granting(flags: &[PermissionFlag]) -> Self {
        let map = flags
            .iter()
            .map(|flag| (flag.as_str().to_string(), Value::Bool(true)))
            .collect();
        Self(map)
    }

    /// Returns true only when the flag is present and set to JSON `true`.
    pub fn has(&self, flag: PermissionFlag) -> bool {
        matches!(self.0.get(flag.as_str()), Some(Value::Bool(true)))
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.0)
    }

    pub fn to_dto(&self) -> RolePermissionsDto {
        RolePermissionsDto {
            can_kick_members: self.has(PermissionFlag::KickMembers),
            can_manage_channels: self.has(PermissionFlag::ManageChannels),
            can_manage_messages: self.has(PermissionFlag::ManageMessages),
            can_manage_roles: self.has(PermissionFlag::ManageRoles),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub invite_code: String,
    pub created_at: DateTime<Utc>,
}

impl Server {
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            invite_code: entity.invite_code,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            invite_code: self.invite_code,
            created_at: self.created_at,
        }
    }
}

/// Membership of a profile in a server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerMember {
    pub id: Uuid,
    pub server_id: Uuid,
    pub profile_id: Uuid,
    pub joined_at: DateTime<Utc>,
}

impl ServerMember {
    pub fn from_entity(entity: entity::server_member::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            profile_id: entity.profile_id,
            joined_at: entity.joined_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerRole {
    pub id: Uuid,
    pub server_id: Uuid,
    pub name: String,
    pub color: String,
    pub position: i32,
    pub permissions: RolePermissions,
    pub is_default: bool,
}

impl ServerRole {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The server role entity from the database
    ///
    /// # Returns
    /// - `ServerRole` - Domain model with the permission document parsed
    pub fn from_entity(entity: entity::server_role::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            name: entity.name,
            color: entity.color,
            position: entity.position,
            permissions: RolePermissions::from_json(entity.permissions),
            is_default: entity.is_default,
        }
    }

    pub fn into_dto(self) -> ServerRoleDto {
        ServerRoleDto {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            color: self.color,
            position: self.position,
            permissions: self.permissions.to_dto(),
            is_default: self.is_default,
        }
    }
}

/// Parameters for creating a server.
#[derive(Debug, Clone)]
pub struct CreateServerParams {
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub invite_code: String,
}

/// Parameters for creating a role inside a server.
#[derive(Debug, Clone)]
pub struct CreateRoleParams {
    pub server_id: Uuid,
    pub name: String,
    pub color: String,
    pub position: i32,
    pub permissions: RolePermissions,
    pub is_default: bool,
}
