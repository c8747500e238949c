use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChannelDto {
    pub id: Uuid,
    pub server_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub position: i32,
    pub is_private: bool,
    pub allowed_roles: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChannelDto {
    pub server_id: Uuid,
    pub name: String,
    /// `text` (default), `voice` or `announcement`
    #[serde(rename = "type")]
    pub channel_type: Option<String>,
    pub is_private: Option<bool>,
    pub allowed_roles: Option<Vec<Uuid>>,
}
