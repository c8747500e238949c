use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::server::{CreateRoleParams, ServerRole};

pub struct ServerRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoleParams) -> Result<ServerRole, DbErr> {
        let entity = entity::server_role::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            server_id: ActiveValue::Set(params.server_id),
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            position: ActiveValue::Set(params.position),
            permissions: ActiveValue::Set(params.permissions.into_json()),
            is_default: ActiveValue::Set(params.is_default),
        }
        .insert(self.db)
        .await?;

        Ok(ServerRole::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ServerRole>, DbErr> {
        let entity = entity::prelude::ServerRole::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ServerRole::from_entity))
    }

    /// Gets the roles of a server, highest position first.
    pub async fn get_by_server(&self, server_id: Uuid) -> Result<Vec<ServerRole>, DbErr> {
        let entities = entity::prelude::ServerRole::find()
            .filter(entity::server_role::Column::ServerId.eq(server_id))
            .order_by_desc(entity::server_role::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerRole::from_entity).collect())
    }

    /// Gets every role held by a membership.
    pub async fn get_for_member(&self, member_id: Uuid) -> Result<Vec<ServerRole>, DbErr> {
        let entities = entity::prelude::ServerRole::find()
            .inner_join(entity::prelude::MemberRole)
            .filter(entity::member_role::Column::MemberId.eq(member_id))
            .order_by_desc(entity::server_role::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerRole::from_entity).collect())
    }

    /// Counts how many of `role_ids` belong to `server_id`.
    pub async fn count_in_server(&self, server_id: Uuid, role_ids: &[Uuid]) -> Result<u64, DbErr> {
        if role_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::ServerRole::find()
            .filter(entity::server_role::Column::ServerId.eq(server_id))
            .filter(entity::server_role::Column::Id.is_in(role_ids.to_vec()))
            .count(self.db)
            .await
    }
}
