//! Server role factory for creating test role entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};
use uuid::Uuid;

/// Factory for creating server roles with customizable permission flags.
///
/// # Example
///
/// ```rust,ignore
/// let moderator = ServerRoleFactory::new(&db, server.id)
///     .name("Moderator")
///     .permissions(json!({ "can_kick_members": true }))
///     .build()
///     .await?;
/// ```
pub struct ServerRoleFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: Uuid,
    name: String,
    color: String,
    position: i32,
    permissions: Value,
    is_default: bool,
}

impl<'a> ServerRoleFactory<'a> {
    /// Creates a new ServerRoleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Role {id}"`
    /// - color: `"#99aab5"`
    /// - position: `0`
    /// - permissions: `{}` (no flags granted)
    /// - is_default: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server the role belongs to
    ///
    /// # Returns
    /// - `ServerRoleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, server_id: Uuid) -> Self {
        Self {
            db,
            server_id,
            name: format!("Role {}", next_id()),
            color: "#99aab5".to_string(),
            position: 0,
            permissions: json!({}),
            is_default: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the raw permission document, e.g. `{"can_kick_members": true}`.
    pub fn permissions(mut self, permissions: Value) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Builds and inserts the role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server_role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_role::Model, DbErr> {
        entity::server_role::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            server_id: ActiveValue::Set(self.server_id),
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            position: ActiveValue::Set(self.position),
            permissions: ActiveValue::Set(self.permissions),
            is_default: ActiveValue::Set(self.is_default),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role without any permission flags.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server the role belongs to
///
/// # Returns
/// - `Ok(entity::server_role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_role(
    db: &DatabaseConnection,
    server_id: Uuid,
) -> Result<entity::server_role::Model, DbErr> {
    ServerRoleFactory::new(db, server_id).build().await
}

/// Creates a role granting a single permission flag.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server the role belongs to
/// - `flag` - Permission flag name, e.g. `"can_kick_members"`
///
/// # Returns
/// - `Ok(entity::server_role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_role_with_flag(
    db: &DatabaseConnection,
    server_id: Uuid,
    flag: &str,
) -> Result<entity::server_role::Model, DbErr> {
    ServerRoleFactory::new(db, server_id)
        .permissions(json!({ flag: true }))
        .build()
        .await
}
