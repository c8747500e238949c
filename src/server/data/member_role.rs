use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

pub struct MemberRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, member_id: Uuid, role_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::MemberRole::find()
            .filter(entity::member_role::Column::MemberId.eq(member_id))
            .filter(entity::member_role::Column::RoleId.eq(role_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Assigns a role to a membership.
    pub async fn assign(&self, member_id: Uuid, role_id: Uuid) -> Result<(), DbErr> {
        entity::member_role::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            member_id: ActiveValue::Set(member_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a role from a membership.
    ///
    /// # Returns
    /// - `Ok(true)` - The assignment existed and was removed
    /// - `Ok(false)` - The membership did not hold the role
    pub async fn remove(&self, member_id: Uuid, role_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::MemberRole::delete_many()
            .filter(entity::member_role::Column::MemberId.eq(member_id))
            .filter(entity::member_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
