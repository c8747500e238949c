//! Friendship factory for creating test friendship entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating a friendship row between a requester and a recipient.
pub struct FriendshipFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: Uuid,
    recipient_id: Uuid,
    status: String,
}

impl<'a> FriendshipFactory<'a> {
    /// Creates a new pending FriendshipFactory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `requester_id` - Profile that sent the request (`user_id1`)
    /// - `recipient_id` - Profile that received the request (`user_id2`)
    ///
    /// # Returns
    /// - `FriendshipFactory` - New factory instance with status `"pending"`
    pub fn new(db: &'a DatabaseConnection, requester_id: Uuid, recipient_id: Uuid) -> Self {
        Self {
            db,
            requester_id,
            recipient_id,
            status: "pending".to_string(),
        }
    }

    /// Marks the friendship as accepted.
    pub fn accepted(mut self) -> Self {
        self.status = "accepted".to_string();
        self
    }

    /// Builds and inserts the friendship entity into the database.
    ///
    /// The pair key is the two profile ids in ascending order joined by `:`.
    ///
    /// # Returns
    /// - `Ok(entity::friendship::Model)` - Created friendship entity
    /// - `Err(DbErr)` - Database error during insert, including an existing row for the pair
    pub async fn build(self) -> Result<entity::friendship::Model, DbErr> {
        let (low, high) = if self.requester_id <= self.recipient_id {
            (self.requester_id, self.recipient_id)
        } else {
            (self.recipient_id, self.requester_id)
        };

        entity::friendship::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id1: ActiveValue::Set(self.requester_id),
            user_id2: ActiveValue::Set(self.recipient_id),
            pair_key: ActiveValue::Set(format!("{}:{}", low, high)),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending friend request from `requester_id` to `recipient_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `requester_id` - Profile sending the request
/// - `recipient_id` - Profile receiving the request
///
/// # Returns
/// - `Ok(entity::friendship::Model)` - Created friendship entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_friendship(
    db: &DatabaseConnection,
    requester_id: Uuid,
    recipient_id: Uuid,
) -> Result<entity::friendship::Model, DbErr> {
    FriendshipFactory::new(db, requester_id, recipient_id)
        .build()
        .await
}
