use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::server::{
    data::{friendship::FriendshipRepository, is_unique_violation, profile::ProfileRepository},
    error::{auth::AuthError, AppError},
    model::{
        friendship::{Friend, Friendship, PendingRequest},
        profile::Profile,
    },
    policy::friendship::{check_accept, check_request, AcceptOutcome, RequestRejection},
};

pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a friend request from `requester_id` to `target_id`.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - The new pending request
    /// - `Err(AppError::NotFound)` - Target profile does not exist
    /// - `Err(AppError::BadRequest)` - Self request, or a record already exists for the pair
    pub async fn send_request(
        &self,
        requester_id: Uuid,
        target_id: Uuid,
    ) -> Result<Friendship, AppError> {
        if requester_id != target_id
            && ProfileRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = FriendshipRepository::new(self.db);
        let existing = repo.find_between(requester_id, target_id).await?;

        check_request(requester_id, target_id, existing.as_ref()).map_err(rejected)?;

        match repo.create(requester_id, target_id).await {
            Ok(friendship) => Ok(friendship),
            Err(e) if is_unique_violation(&e) => Err(rejected(RequestRejection::AlreadyPending)),
            Err(e) => Err(e.into()),
        }
    }

    /// Accepts a pending friend request addressed to `actor_id`.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - The accepted friendship; unchanged when already accepted
    /// - `Err(AppError::NotFound)` - No such request
    /// - `Err(AuthError::AccessDenied)` - Caller is not the recipient
    pub async fn accept(&self, actor_id: Uuid, request_id: Uuid) -> Result<Friendship, AppError> {
        let repo = FriendshipRepository::new(self.db);
        let friendship = repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

        let outcome = check_accept(actor_id, &friendship)
            .map_err(|r| AuthError::AccessDenied(actor_id, r.to_string()))?;

        match outcome {
            AcceptOutcome::Accept => Ok(repo.accept(friendship.id).await?),
            AcceptOutcome::AlreadyAccepted => Ok(friendship),
        }
    }

    /// Gets the accepted friends of a profile, each counterpart once.
    pub async fn friends(&self, profile_id: Uuid) -> Result<Vec<Friend>, AppError> {
        let friendships = FriendshipRepository::new(self.db)
            .get_accepted_for(profile_id)
            .await?;

        let mut seen = HashSet::new();
        let pairs: Vec<(Uuid, Uuid)> = friendships
            .iter()
            .map(|f| (f.id, f.counterpart(profile_id)))
            .filter(|(_, counterpart)| seen.insert(*counterpart))
            .collect();

        let counterpart_ids: Vec<Uuid> = pairs.iter().map(|(_, id)| *id).collect();
        let mut profiles = self.profiles_by_id(&counterpart_ids).await?;

        Ok(pairs
            .into_iter()
            .filter_map(|(friendship_id, counterpart)| {
                profiles.remove(&counterpart).map(|profile| Friend {
                    friendship_id,
                    profile,
                })
            })
            .collect())
    }

    /// Gets pending requests where the profile is the recipient, with each sender resolved.
    pub async fn pending(&self, profile_id: Uuid) -> Result<Vec<PendingRequest>, AppError> {
        let requests = FriendshipRepository::new(self.db)
            .get_pending_for_recipient(profile_id)
            .await?;

        let sender_ids: Vec<Uuid> = requests.iter().map(|f| f.requester_id).collect();
        let profiles = self.profiles_by_id(&sender_ids).await?;

        Ok(requests
            .into_iter()
            .filter_map(|friendship| {
                profiles
                    .get(&friendship.requester_id)
                    .cloned()
                    .map(|sender| PendingRequest { friendship, sender })
            })
            .collect())
    }

    async fn profiles_by_id(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Profile>, AppError> {
        Ok(ProfileRepository::new(self.db)
            .get_by_ids(ids)
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect())
    }
}

fn rejected(rejection: RequestRejection) -> AppError {
    AppError::BadRequest(rejection.to_string())
}
