use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    model::friend::{FriendDto, PendingRequestDto},
    server::model::profile::Profile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipStatus {
    Pending,
    Accepted,
}

impl FriendshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendshipStatus::Pending => "pending",
            FriendshipStatus::Accepted => "accepted",
        }
    }
}

impl FromStr for FriendshipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FriendshipStatus::Pending),
            "accepted" => Ok(FriendshipStatus::Accepted),
            other => Err(format!("Invalid friendship status: {}", other)),
        }
    }
}

/// A friendship record between two profiles.
///
/// The record is directional while pending: `requester_id` sent the request and only
/// `recipient_id` may accept it.
#[derive(Debug, Clone, PartialEq)]
pub struct Friendship {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub recipient_id: Uuid,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not `pending` or `accepted`
    pub fn from_entity(entity: entity::friendship::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<FriendshipStatus>()
            .map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            requester_id: entity.user_id1,
            recipient_id: entity.user_id2,
            status,
            created_at: entity.created_at,
        })
    }

    /// Returns the other side of the pair as seen from `profile_id`.
    ///
    /// A profile that is not part of the pair gets the requester back.
    pub fn counterpart(&self, profile_id: Uuid) -> Uuid {
        if self.requester_id == profile_id {
            self.recipient_id
        } else {
            self.requester_id
        }
    }

    pub fn involves(&self, profile_id: Uuid) -> bool {
        self.requester_id == profile_id || self.recipient_id == profile_id
    }
}

/// Order-independent key identifying the unordered pair `{a, b}`.
///
/// Stored in a unique column so the database rejects a second record for the same pair
/// regardless of who sent the request.
pub fn pair_key(a: Uuid, b: Uuid) -> String {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    format!("{}:{}", low, high)
}

/// An accepted friendship with the counterpart's profile resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub friendship_id: Uuid,
    pub profile: Profile,
}

impl Friend {
    pub fn into_dto(self) -> FriendDto {
        FriendDto {
            friendship_id: self.friendship_id,
            profile: self.profile.into_dto(),
        }
    }
}

/// A pending request addressed to the caller with the sender's profile resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub friendship: Friendship,
    pub sender: Profile,
}

impl PendingRequest {
    pub fn into_dto(self) -> PendingRequestDto {
        PendingRequestDto {
            id: self.friendship.id,
            status: self.friendship.status.as_str().to_string(),
            user_id1: self.friendship.requester_id,
            sender: self.sender.into_dto(),
        }
    }
}
