//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test servers owned by a given profile.
///
/// Only inserts the server row. Use `helpers::create_server_with_owner` when the owner's
/// membership is also required.
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    name: String,
    description: Option<String>,
    invite_code: String,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"`
    /// - description: `None`
    /// - invite_code: `"invite{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - Profile id of the server owner
    ///
    /// # Returns
    /// - `ServerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Server {}", id),
            description: None,
            invite_code: format!("invite{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn invite_code(mut self, invite_code: impl Into<String>) -> Self {
        self.invite_code = invite_code.into();
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert or missing owner profile
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            invite_code: ActiveValue::Set(self.invite_code),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values owned by `owner_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - Profile id of the server owner
///
/// # Returns
/// - `Ok(entity::server::Model)` - Created server entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, owner_id).build().await
}
