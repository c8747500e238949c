use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::profile::ProfileDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttachmentDto {
    pub url: String,
    pub name: String,
    /// `image` or `file`
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReactionSummaryDto {
    pub emoji: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub reply_to_id: Option<Uuid>,
    pub attachments: Vec<AttachmentDto>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub author: Option<ProfileDto>,
    pub reactions: Vec<ReactionSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub channel_id: Uuid,
    #[serde(default)]
    pub content: String,
    pub reply_to_id: Option<Uuid>,
    pub attachments: Option<Vec<AttachmentDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddReactionDto {
    pub emoji: String,
}
