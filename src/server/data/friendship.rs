use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::friendship::{pair_key, Friendship, FriendshipStatus};

pub struct FriendshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a pending request from `requester_id` to `recipient_id`.
    ///
    /// The unique `pair_key` rejects a second row for the same unordered pair.
    pub async fn create(
        &self,
        requester_id: Uuid,
        recipient_id: Uuid,
    ) -> Result<Friendship, DbErr> {
        let entity = entity::friendship::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id1: ActiveValue::Set(requester_id),
            user_id2: ActiveValue::Set(recipient_id),
            pair_key: ActiveValue::Set(pair_key(requester_id, recipient_id)),
            status: ActiveValue::Set(FriendshipStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Friendship::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Friendship>, DbErr> {
        entity::prelude::Friendship::find_by_id(id)
            .one(self.db)
            .await?
            .map(Friendship::from_entity)
            .transpose()
    }

    /// Finds the friendship between two profiles in either direction.
    pub async fn find_between(&self, a: Uuid, b: Uuid) -> Result<Option<Friendship>, DbErr> {
        entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::PairKey.eq(pair_key(a, b)))
            .one(self.db)
            .await?
            .map(Friendship::from_entity)
            .transpose()
    }

    /// Marks a friendship accepted.
    pub async fn accept(&self, id: Uuid) -> Result<Friendship, DbErr> {
        let entity = entity::friendship::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(FriendshipStatus::Accepted.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Friendship::from_entity(entity)
    }

    /// Gets accepted friendships involving the profile on either side.
    pub async fn get_accepted_for(&self, profile_id: Uuid) -> Result<Vec<Friendship>, DbErr> {
        let entities = entity::prelude::Friendship::find()
            .filter(
                entity::friendship::Column::Status.eq(FriendshipStatus::Accepted.as_str()),
            )
            .filter(
                Condition::any()
                    .add(entity::friendship::Column::UserId1.eq(profile_id))
                    .add(entity::friendship::Column::UserId2.eq(profile_id)),
            )
            .order_by_asc(entity::friendship::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Friendship::from_entity).collect()
    }

    /// Gets pending requests addressed to the profile.
    pub async fn get_pending_for_recipient(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<Friendship>, DbErr> {
        let entities = entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::Status.eq(FriendshipStatus::Pending.as_str()))
            .filter(entity::friendship::Column::UserId2.eq(profile_id))
            .order_by_asc(entity::friendship::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Friendship::from_entity).collect()
    }
}
