//! Server role fixtures for creating in-memory test data.

use entity::server_role;
use serde_json::{json, Value};
use uuid::Uuid;

/// Default test role name.
pub const DEFAULT_NAME: &str = "Member";

/// Default test role color.
pub const DEFAULT_COLOR: &str = "#99aab5";

/// Creates a role entity model with default values and a fresh id.
///
/// # Default Values
/// - server_id: random
/// - name: `"Member"`
/// - color: `"#99aab5"`
/// - position: `0`
/// - permissions: `{}`
/// - is_default: `false`
///
/// # Returns
/// - `server_role::Model` - In-memory role entity
pub fn entity() -> server_role::Model {
    entity_builder().build()
}

/// Creates a role entity builder for customization.
///
/// # Returns
/// - `ServerRoleEntityBuilder` - Builder with default values
pub fn entity_builder() -> ServerRoleEntityBuilder {
    ServerRoleEntityBuilder {
        id: Uuid::new_v4(),
        server_id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
        color: DEFAULT_COLOR.to_string(),
        position: 0,
        permissions: json!({}),
        is_default: false,
    }
}

/// Builder for in-memory server role entities.
pub struct ServerRoleEntityBuilder {
    id: Uuid,
    server_id: Uuid,
    name: String,
    color: String,
    position: i32,
    permissions: Value,
    is_default: bool,
}

impl ServerRoleEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn server_id(mut self, server_id: Uuid) -> Self {
        self.server_id = server_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn permissions(mut self, permissions: Value) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Builds the in-memory role entity.
    pub fn build(self) -> server_role::Model {
        server_role::Model {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            color: self.color,
            position: self.position,
            permissions: self.permissions,
            is_default: self.is_default,
        }
    }
}
