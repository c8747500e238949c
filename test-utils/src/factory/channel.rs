//! Channel factory for creating test channel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;
use uuid::Uuid;

/// Factory for creating channels with customizable visibility.
///
/// # Example
///
/// ```rust,ignore
/// let staff = ChannelFactory::new(&db, server.id)
///     .name("staff")
///     .private(vec![moderator.id])
///     .build()
///     .await?;
/// ```
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: Uuid,
    name: String,
    channel_type: String,
    position: i32,
    is_private: bool,
    allowed_roles: Vec<Uuid>,
}

impl<'a> ChannelFactory<'a> {
    /// Creates a new ChannelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"channel-{id}"`
    /// - channel_type: `"text"`
    /// - position: `0`
    /// - is_private: `false`
    /// - allowed_roles: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server the channel belongs to
    ///
    /// # Returns
    /// - `ChannelFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, server_id: Uuid) -> Self {
        Self {
            db,
            server_id,
            name: format!("channel-{}", next_id()),
            channel_type: "text".to_string(),
            position: 0,
            is_private: false,
            allowed_roles: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the channel type (`"text"`, `"voice"` or `"announcement"`).
    pub fn channel_type(mut self, channel_type: impl Into<String>) -> Self {
        self.channel_type = channel_type.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Marks the channel private, visible only to the listed roles and the owner.
    pub fn private(mut self, allowed_roles: Vec<Uuid>) -> Self {
        self.is_private = true;
        self.allowed_roles = allowed_roles;
        self
    }

    /// Builds and inserts the channel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::channel::Model)` - Created channel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        let allowed_roles = Value::Array(
            self.allowed_roles
                .iter()
                .map(|id| Value::String(id.to_string()))
                .collect(),
        );

        entity::channel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            server_id: ActiveValue::Set(self.server_id),
            name: ActiveValue::Set(self.name),
            channel_type: ActiveValue::Set(self.channel_type),
            position: ActiveValue::Set(self.position),
            is_private: ActiveValue::Set(self.is_private),
            allowed_roles: ActiveValue::Set(allowed_roles),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public text channel.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server the channel belongs to
///
/// # Returns
/// - `Ok(entity::channel::Model)` - Created channel entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_channel(
    db: &DatabaseConnection,
    server_id: Uuid,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db, server_id).build().await
}
