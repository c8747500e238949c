use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::profile::ProfileDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestDto {
    pub target_user_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptFriendDto {
    pub request_id: Uuid,
}

/// An accepted friend: the friendship id plus the counterpart's public profile.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FriendDto {
    pub friendship_id: Uuid,
    #[serde(flatten)]
    pub profile: ProfileDto,
}

/// A pending request addressed to the caller.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PendingRequestDto {
    pub id: Uuid,
    pub status: String,
    pub user_id1: Uuid,
    pub sender: ProfileDto,
}
