//! Profile factory for creating test profile entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let profile = ProfileFactory::new(&db)
///     .username("alice")
///     .display_name("Alice")
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    username: String,
    display_name: String,
    avatar_url: Option<String>,
    status: String,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"auth-user-{id}"`
    /// - username: `"user{id}"`
    /// - display_name: `"User {id}"`
    /// - avatar_url: `None`
    /// - status: `"offline"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ProfileFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: format!("auth-user-{}", id),
            username: format!("user{}", id),
            display_name: format!("User {}", id),
            avatar_url: None,
            status: "offline".to_string(),
        }
    }

    /// Sets the identity provider user id the profile is linked to.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the unique username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the avatar URL.
    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the presence status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::profile::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            display_name: ActiveValue::Set(self.display_name),
            avatar_url: ActiveValue::Set(self.avatar_url),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::profile::Model)` - Created profile entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_profile(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).build().await
}

/// Creates a profile with a specific username.
///
/// # Arguments
/// - `db` - Database connection
/// - `username` - Unique username for the profile
///
/// # Returns
/// - `Ok(entity::profile::Model)` - Created profile entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_profile_named(
    db: &DatabaseConnection,
    username: impl Into<String>,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).username(username).build().await
}
