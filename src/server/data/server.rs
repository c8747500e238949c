use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::server::{CreateServerParams, Server};

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateServerParams) -> Result<Server, DbErr> {
        let entity = entity::server::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            invite_code: ActiveValue::Set(params.invite_code),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Server::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Server::from_entity))
    }

    pub async fn find_by_invite_code(&self, invite_code: &str) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find()
            .filter(entity::server::Column::InviteCode.eq(invite_code))
            .one(self.db)
            .await?;

        Ok(entity.map(Server::from_entity))
    }

    pub async fn invite_code_exists(&self, invite_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Server::find()
            .filter(entity::server::Column::InviteCode.eq(invite_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every server the profile owns or is a member of.
    ///
    /// Each server appears once even when the profile is both owner and member.
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Servers ordered by creation time, oldest first
    /// - `Err(DbErr)` - Database error
    pub async fn get_for_profile(&self, profile_id: Uuid) -> Result<Vec<Server>, DbErr> {
        let member_server_ids: Vec<Uuid> = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .filter(entity::server_member::Column::ProfileId.eq(profile_id))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut condition =
            Condition::any().add(entity::server::Column::OwnerId.eq(profile_id));
        if !member_server_ids.is_empty() {
            condition = condition.add(entity::server::Column::Id.is_in(member_server_ids));
        }

        let entities = entity::prelude::Server::find()
            .filter(condition)
            .order_by_asc(entity::server::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Server::from_entity).collect())
    }
}
