use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::server::ServerMember;

pub struct ServerMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a profile to a server.
    ///
    /// The `(server_id, profile_id)` unique index rejects a second membership.
    pub async fn create(&self, server_id: Uuid, profile_id: Uuid) -> Result<ServerMember, DbErr> {
        let entity = entity::server_member::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            server_id: ActiveValue::Set(server_id),
            profile_id: ActiveValue::Set(profile_id),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ServerMember::from_entity(entity))
    }

    /// Finds the membership of `profile_id` in `server_id`.
    pub async fn find(
        &self,
        server_id: Uuid,
        profile_id: Uuid,
    ) -> Result<Option<ServerMember>, DbErr> {
        let entity = entity::prelude::ServerMember::find()
            .filter(entity::server_member::Column::ServerId.eq(server_id))
            .filter(entity::server_member::Column::ProfileId.eq(profile_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ServerMember::from_entity))
    }

    /// Deletes a membership. Its role assignments cascade.
    pub async fn delete(&self, member_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::MemberRole::delete_many()
            .filter(entity::member_role::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        entity::prelude::ServerMember::delete_by_id(member_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
