use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::Value;
use uuid::Uuid;

use crate::server::model::message::{CreateMessageParams, Message, DELETED_MESSAGE_CONTENT};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let attachments = serde_json::to_value(&params.attachments)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize attachments: {}", e)))?;

        let entity = entity::message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            channel_id: ActiveValue::Set(params.channel_id),
            author_id: ActiveValue::Set(params.author_id),
            content: ActiveValue::Set(params.content),
            reply_to_id: ActiveValue::Set(params.reply_to_id),
            attachments: ActiveValue::Set(attachments),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Message::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, DbErr> {
        entity::prelude::Message::find_by_id(id)
            .one(self.db)
            .await?
            .map(Message::from_entity)
            .transpose()
    }

    /// Gets the most recent messages of a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Channel to read
    /// - `limit` - Maximum number of messages
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - The newest `limit` messages, oldest first
    /// - `Err(DbErr)` - Database error or a stored attachment list failed to parse
    pub async fn get_latest_by_channel(
        &self,
        channel_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::ChannelId.eq(channel_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        let mut messages = entities
            .into_iter()
            .map(Message::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        messages.reverse();

        Ok(messages)
    }

    /// Replaces the message body with the deletion placeholder and drops its attachments.
    pub async fn soft_delete(&self, id: Uuid) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            id: ActiveValue::Unchanged(id),
            content: ActiveValue::Set(DELETED_MESSAGE_CONTENT.to_string()),
            attachments: ActiveValue::Set(Value::Array(Vec::new())),
            is_deleted: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Message::from_entity(entity)
    }
}
