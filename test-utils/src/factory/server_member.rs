//! Server member factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating membership rows linking a profile to a server.
pub struct ServerMemberFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: Uuid,
    profile_id: Uuid,
    joined_at: DateTime<Utc>,
}

impl<'a> ServerMemberFactory<'a> {
    /// Creates a new ServerMemberFactory joined at the current time.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server being joined
    /// - `profile_id` - Profile joining the server
    ///
    /// # Returns
    /// - `ServerMemberFactory` - New factory instance
    pub fn new(db: &'a DatabaseConnection, server_id: Uuid, profile_id: Uuid) -> Self {
        Self {
            db,
            server_id,
            profile_id,
            joined_at: Utc::now(),
        }
    }

    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    /// Builds and inserts the membership row.
    ///
    /// # Returns
    /// - `Ok(entity::server_member::Model)` - Created membership
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_member::Model, DbErr> {
        entity::server_member::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            server_id: ActiveValue::Set(self.server_id),
            profile_id: ActiveValue::Set(self.profile_id),
            joined_at: ActiveValue::Set(self.joined_at),
        }
        .insert(self.db)
        .await
    }
}

/// Joins `profile_id` to `server_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server being joined
/// - `profile_id` - Profile joining the server
///
/// # Returns
/// - `Ok(entity::server_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    server_id: Uuid,
    profile_id: Uuid,
) -> Result<entity::server_member::Model, DbErr> {
    ServerMemberFactory::new(db, server_id, profile_id)
        .build()
        .await
}
