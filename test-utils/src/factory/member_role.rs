//! Member role assignment factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Assigns `role_id` to the membership `member_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - Membership row receiving the role
/// - `role_id` - Role being assigned
///
/// # Returns
/// - `Ok(entity::member_role::Model)` - Created assignment
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member_role(
    db: &DatabaseConnection,
    member_id: Uuid,
    role_id: Uuid,
) -> Result<entity::member_role::Model, DbErr> {
    entity::member_role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        member_id: ActiveValue::Set(member_id),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}
