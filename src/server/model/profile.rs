use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::profile::ProfileDto;

/// Application-level user record linked to one identity provider account.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    /// Identity provider user id.
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    /// Presence string, `offline` unless the client reports otherwise.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            username: entity.username,
            display_name: entity.display_name,
            avatar_url: entity.avatar_url,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    /// Converts the profile into its public DTO, dropping the identity link.
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            status: self.status,
        }
    }
}

/// Parameters for creating the profile of a freshly registered identity.
#[derive(Debug, Clone)]
pub struct CreateProfileParams {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
}
