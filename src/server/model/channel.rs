use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde_json::Value;
use std::str::FromStr;
use uuid::Uuid;

use crate::model::channel::{ChannelDto, CreateChannelDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    Text,
    Voice,
    Announcement,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Text => "text",
            ChannelType::Voice => "voice",
            ChannelType::Announcement => "announcement",
        }
    }
}

impl FromStr for ChannelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ChannelType::Text),
            "voice" => Ok(ChannelType::Voice),
            "announcement" => Ok(ChannelType::Announcement),
            other => Err(format!("Invalid channel type: {}", other)),
        }
    }
}

/// A channel inside a server.
///
/// A private channel is visible to the server owner and to holders of any role listed in
/// `allowed_roles`. A private channel with no allowed roles is visible to the owner only.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: Uuid,
    pub server_id: Uuid,
    pub name: String,
    pub channel_type: ChannelType,
    pub position: i32,
    pub is_private: bool,
    pub allowed_roles: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The channel entity from the database
    ///
    /// # Returns
    /// - `Ok(Channel)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Unknown channel type or malformed allowed role list
    pub fn from_entity(entity: entity::channel::Model) -> Result<Self, DbErr> {
        let channel_type = entity
            .channel_type
            .parse::<ChannelType>()
            .map_err(DbErr::Custom)?;

        let allowed_roles = parse_role_ids(entity.allowed_roles)?;

        Ok(Self {
            id: entity.id,
            server_id: entity.server_id,
            name: entity.name,
            channel_type,
            position: entity.position,
            is_private: entity.is_private,
            allowed_roles,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            channel_type: self.channel_type.as_str().to_string(),
            position: self.position,
            is_private: self.is_private,
            allowed_roles: self.allowed_roles,
            created_at: self.created_at,
        }
    }
}

/// Parses the stored allowed role list, a JSON array of role id strings.
///
/// A JSON `null` is treated as an empty list.
fn parse_role_ids(value: Value) -> Result<Vec<Uuid>, DbErr> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Uuid::parse_str(&s)
                    .map_err(|e| DbErr::Custom(format!("Failed to parse allowed role id: {}", e))),
                other => Err(DbErr::Custom(format!(
                    "Allowed role id is not a string: {}",
                    other
                ))),
            })
            .collect(),
        other => Err(DbErr::Custom(format!(
            "Allowed roles is not an array: {}",
            other
        ))),
    }
}

/// Serializes role ids into the stored allowed role list.
pub fn role_ids_to_json(role_ids: &[Uuid]) -> Value {
    Value::Array(
        role_ids
            .iter()
            .map(|id| Value::String(id.to_string()))
            .collect(),
    )
}

/// Parameters for creating a channel.
#[derive(Debug, Clone)]
pub struct CreateChannelParams {
    pub server_id: Uuid,
    pub name: String,
    pub channel_type: ChannelType,
    pub position: i32,
    pub is_private: bool,
    pub allowed_roles: Vec<Uuid>,
}

/// A channel creation request as received, before validation against the server.
#[derive(Debug, Clone)]
pub struct ChannelDraft {
    pub server_id: Uuid,
    pub name: String,
    pub channel_type: Option<String>,
    pub is_private: bool,
    pub allowed_roles: Vec<Uuid>,
}

impl ChannelDraft {
    pub fn from_dto(dto: CreateChannelDto) -> Self {
        Self {
            server_id: dto.server_id,
            name: dto.name,
            channel_type: dto.channel_type,
            is_private: dto.is_private.unwrap_or(false),
            allowed_roles: dto.allowed_roles.unwrap_or_default(),
        }
    }
}
