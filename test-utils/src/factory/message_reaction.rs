//! Message reaction factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Records `profile_id` reacting to `message_id` with `emoji`.
///
/// # Arguments
/// - `db` - Database connection
/// - `message_id` - Message being reacted to
/// - `profile_id` - Reacting profile
/// - `emoji` - Emoji string
///
/// # Returns
/// - `Ok(entity::message_reaction::Model)` - Created reaction
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reaction(
    db: &DatabaseConnection,
    message_id: Uuid,
    profile_id: Uuid,
    emoji: &str,
) -> Result<entity::message_reaction::Model, DbErr> {
    entity::message_reaction::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        message_id: ActiveValue::Set(message_id),
        profile_id: ActiveValue::Set(profile_id),
        emoji: ActiveValue::Set(emoji.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
