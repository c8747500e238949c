use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::message::Reaction;

pub struct MessageReactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageReactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(
        &self,
        message_id: Uuid,
        profile_id: Uuid,
        emoji: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::MessageReaction::find()
            .filter(entity::message_reaction::Column::MessageId.eq(message_id))
            .filter(entity::message_reaction::Column::ProfileId.eq(profile_id))
            .filter(entity::message_reaction::Column::Emoji.eq(emoji))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(
        &self,
        message_id: Uuid,
        profile_id: Uuid,
        emoji: &str,
    ) -> Result<Reaction, DbErr> {
        let entity = entity::message_reaction::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            message_id: ActiveValue::Set(message_id),
            profile_id: ActiveValue::Set(profile_id),
            emoji: ActiveValue::Set(emoji.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Reaction::from_entity(entity))
    }

    /// Deletes one profile's reaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The reaction existed and was removed
    /// - `Ok(false)` - No such reaction
    pub async fn delete(
        &self,
        message_id: Uuid,
        profile_id: Uuid,
        emoji: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::MessageReaction::delete_many()
            .filter(entity::message_reaction::Column::MessageId.eq(message_id))
            .filter(entity::message_reaction::Column::ProfileId.eq(profile_id))
            .filter(entity::message_reaction::Column::Emoji.eq(emoji))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every reaction on the given messages.
    pub async fn get_by_messages(&self, message_ids: &[Uuid]) -> Result<Vec<Reaction>, DbErr> {
        if message_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MessageReaction::find()
            .filter(entity::message_reaction::Column::MessageId.is_in(message_ids.to_vec()))
            .order_by_asc(entity::message_reaction::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reaction::from_entity).collect())
    }
}
