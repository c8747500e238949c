use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::profile::{CreateProfileParams, Profile};

/// Status assigned to freshly created profiles.
const DEFAULT_STATUS: &str = "offline";

/// Escape character for `LIKE` patterns built from user input.
const LIKE_ESCAPE: char = '\\';

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the profile for an identity provider user.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The inserted profile
    /// - `Err(DbErr)` - Insert failed, including unique violations on `user_id` or `username`
    pub async fn create(&self, params: CreateProfileParams) -> Result<Profile, DbErr> {
        let entity = entity::profile::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            username: ActiveValue::Set(params.username),
            display_name: ActiveValue::Set(params.display_name),
            avatar_url: ActiveValue::Set(None),
            status: ActiveValue::Set(DEFAULT_STATUS.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Finds the profile linked to an identity provider user id.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Gets all profiles with the given ids. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Profile>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Profile::from_entity).collect())
    }

    /// Searches profiles whose username or display name contains `query`, ignoring case.
    ///
    /// `%` and `_` in `query` match literally.
    ///
    /// # Arguments
    /// - `query` - Substring to look for
    /// - `limit` - Maximum number of profiles returned
    ///
    /// # Returns
    /// - `Ok(Vec<Profile>)` - Matches ordered by username
    /// - `Err(DbErr)` - Database error
    pub async fn search(&self, query: &str, limit: u64) -> Result<Vec<Profile>, DbErr> {
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));
        let contains = |column: entity::profile::Column| {
            sea_orm::sea_query::ExprTrait::like(
                Func::lower(Expr::col(column)),
                LikeExpr::new(pattern.as_str()).escape(LIKE_ESCAPE),
            )
        };

        let entities = entity::prelude::Profile::find()
            .filter(
                Condition::any()
                    .add(contains(entity::profile::Column::Username))
                    .add(contains(entity::profile::Column::DisplayName)),
            )
            .order_by_asc(entity::profile::Column::Username)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Profile::from_entity).collect())
    }
}

/// Escapes `LIKE` wildcards and the escape character itself.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
