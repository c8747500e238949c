use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::message::{AttachmentDto, MessageDto, ReactionSummaryDto, SendMessageDto},
    server::model::profile::Profile,
};

/// Content shown in place of a soft-deleted message.
pub const DELETED_MESSAGE_CONTENT: &str = "This message was deleted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    File,
}

impl AttachmentKind {
    /// `Image` for `image/*` content types, `File` otherwise.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("image/") {
            AttachmentKind::Image
        } else {
            AttachmentKind::File
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::File => "file",
        }
    }
}

/// Reference to an uploaded blob attached to a message. Stored inline as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub size: u64,
}

impl Attachment {
    /// Converts a request attachment, rejecting unknown kinds.
    pub fn from_dto(dto: AttachmentDto) -> Result<Self, String> {
        let kind = match dto.kind.as_str() {
            "image" => AttachmentKind::Image,
            "file" => AttachmentKind::File,
            other => return Err(format!("Invalid attachment type: {}", other)),
        };

        Ok(Self {
            url: dto.url,
            name: dto.name,
            kind,
            size: dto.size,
        })
    }

    pub fn into_dto(self) -> AttachmentDto {
        AttachmentDto {
            url: self.url,
            name: self.name,
            kind: self.kind.as_str().to_string(),
            size: self.size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub reply_to_id: Option<Uuid>,
    pub attachments: Vec<Attachment>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Message)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored attachment list does not match the expected shape
    pub fn from_entity(entity: entity::message::Model) -> Result<Self, DbErr> {
        let attachments = match entity.attachments {
            Value::Null => Vec::new(),
            value => serde_json::from_value(value)
                .map_err(|e| DbErr::Custom(format!("Failed to parse attachments: {}", e)))?,
        };

        Ok(Self {
            id: entity.id,
            channel_id: entity.channel_id,
            author_id: entity.author_id,
            content: entity.content,
            reply_to_id: entity.reply_to_id,
            attachments,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
        })
    }
}

/// Per-emoji reaction count on a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionSummary {
    pub emoji: String,
    pub count: u64,
}

impl ReactionSummary {
    pub fn into_dto(self) -> ReactionSummaryDto {
        ReactionSummaryDto {
            emoji: self.emoji,
            count: self.count,
        }
    }
}

/// One stored reaction row.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub message_id: Uuid,
    pub profile_id: Uuid,
    pub emoji: String,
}

impl Reaction {
    pub fn from_entity(entity: entity::message_reaction::Model) -> Self {
        Self {
            message_id: entity.message_id,
            profile_id: entity.profile_id,
            emoji: entity.emoji,
        }
    }
}

/// A message together with its author's public profile and reaction counts.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageWithDetails {
    pub message: Message,
    pub author: Option<Profile>,
    pub reactions: Vec<ReactionSummary>,
}

impl MessageWithDetails {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.message.id,
            channel_id: self.message.channel_id,
            author_id: self.message.author_id,
            content: self.message.content,
            reply_to_id: self.message.reply_to_id,
            attachments: self
                .message
                .attachments
                .into_iter()
                .map(Attachment::into_dto)
                .collect(),
            is_deleted: self.message.is_deleted,
            created_at: self.message.created_at,
            author: self.author.map(Profile::into_dto),
            reactions: self
                .reactions
                .into_iter()
                .map(ReactionSummary::into_dto)
                .collect(),
        }
    }
}

/// Parameters for inserting a message.
#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub channel_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub reply_to_id: Option<Uuid>,
    pub attachments: Vec<Attachment>,
}

/// A message as submitted by a client, before validation.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub channel_id: Uuid,
    pub content: String,
    pub reply_to_id: Option<Uuid>,
    pub attachments: Vec<AttachmentDto>,
}

impl MessageDraft {
    pub fn from_dto(dto: SendMessageDto) -> Self {
        Self {
            channel_id: dto.channel_id,
            content: dto.content,
            reply_to_id: dto.reply_to_id,
            attachments: dto.attachments.unwrap_or_default(),
        }
    }
}

/// A file received for upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
