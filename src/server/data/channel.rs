use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::channel::{role_ids_to_json, Channel, CreateChannelParams};

pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateChannelParams) -> Result<Channel, DbErr> {
        let entity = entity::channel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            server_id: ActiveValue::Set(params.server_id),
            name: ActiveValue::Set(params.name),
            channel_type: ActiveValue::Set(params.channel_type.as_str().to_string()),
            position: ActiveValue::Set(params.position),
            is_private: ActiveValue::Set(params.is_private),
            allowed_roles: ActiveValue::Set(role_ids_to_json(&params.allowed_roles)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Channel::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Channel>, DbErr> {
        entity::prelude::Channel::find_by_id(id)
            .one(self.db)
            .await?
            .map(Channel::from_entity)
            .transpose()
    }

    /// Gets the channels of a server ordered by position.
    pub async fn get_by_server(&self, server_id: Uuid) -> Result<Vec<Channel>, DbErr> {
        let entities = entity::prelude::Channel::find()
            .filter(entity::channel::Column::ServerId.eq(server_id))
            .order_by_asc(entity::channel::Column::Position)
            .order_by_asc(entity::channel::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Channel::from_entity).collect()
    }

    /// Highest channel position in a server, `None` when it has no channels.
    pub async fn max_position(&self, server_id: Uuid) -> Result<Option<i32>, DbErr> {
        let position: Option<i32> = entity::prelude::Channel::find()
            .select_only()
            .column(entity::channel::Column::Position)
            .filter(entity::channel::Column::ServerId.eq(server_id))
            .order_by_desc(entity::channel::Column::Position)
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(position)
    }

    /// Deletes a channel. Its messages and their reactions are removed with it.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        let message_ids: Vec<Uuid> = entity::prelude::Message::find()
            .select_only()
            .column(entity::message::Column::Id)
            .filter(entity::message::Column::ChannelId.eq(id))
            .into_tuple()
            .all(self.db)
            .await?;

        if !message_ids.is_empty() {
            entity::prelude::MessageReaction::delete_many()
                .filter(entity::message_reaction::Column::MessageId.is_in(message_ids))
                .exec(self.db)
                .await?;
        }

        entity::prelude::Message::delete_many()
            .filter(entity::message::Column::ChannelId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Channel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
