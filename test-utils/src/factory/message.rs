//! Message factory for creating test message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};
use uuid::Uuid;

/// Factory for creating messages with customizable content and timestamps.
///
/// # Example
///
/// ```rust,ignore
/// let message = MessageFactory::new(&db, channel.id, author.id)
///     .content("hello @ai")
///     .created_at(Utc::now() - Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: Uuid,
    author_id: Uuid,
    content: String,
    reply_to_id: Option<Uuid>,
    attachments: Value,
    is_deleted: bool,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Message {id}"`
    /// - reply_to_id: `None`
    /// - attachments: `[]`
    /// - is_deleted: `false`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `channel_id` - Channel the message is posted in
    /// - `author_id` - Profile authoring the message
    ///
    /// # Returns
    /// - `MessageFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, channel_id: Uuid, author_id: Uuid) -> Self {
        Self {
            db,
            channel_id,
            author_id,
            content: format!("Message {}", next_id()),
            reply_to_id: None,
            attachments: json!([]),
            is_deleted: false,
            created_at: Utc::now(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn reply_to(mut self, message_id: Uuid) -> Self {
        self.reply_to_id = Some(message_id);
        self
    }

    /// Sets the raw attachment document, a JSON array of `{url, name, type, size}`.
    pub fn attachments(mut self, attachments: Value) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            channel_id: ActiveValue::Set(self.channel_id),
            author_id: ActiveValue::Set(self.author_id),
            content: ActiveValue::Set(self.content),
            reply_to_id: ActiveValue::Set(self.reply_to_id),
            attachments: ActiveValue::Set(self.attachments),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default content.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_id` - Channel the message is posted in
/// - `author_id` - Profile authoring the message
///
/// # Returns
/// - `Ok(entity::message::Model)` - Created message entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_message(
    db: &DatabaseConnection,
    channel_id: Uuid,
    author_id: Uuid,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, channel_id, author_id).build().await
}
