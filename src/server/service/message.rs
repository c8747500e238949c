use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    data::{
        is_unique_violation, message::MessageRepository,
        message_reaction::MessageReactionRepository, profile::ProfileRepository,
    },
    error::AppError,
    model::{
        message::{
            Attachment, CreateMessageParams, Message, MessageDraft, MessageWithDetails,
            ReactionSummary,
        },
        profile::Profile,
        server::PermissionFlag,
    },
    policy::{
        reaction::summarize_reactions,
        responder::{auto_reply_for, AutoReplyJob},
    },
    service::access::ServerAccess,
};

/// Number of messages returned when listing a channel.
const HISTORY_LIMIT: u64 = 100;

/// A stored message and the auto-reply it triggered, if any.
#[derive(Debug)]
pub struct SentMessage {
    pub message: MessageWithDetails,
    pub auto_reply: Option<AutoReplyJob>,
}

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the latest messages of a channel, oldest first, with authors and reactions.
    ///
    /// # Arguments
    /// - `profile_id` - Caller, must be a member able to see the channel
    /// - `channel_id` - Channel to read
    ///
    /// # Returns
    /// - `Ok(Vec<MessageWithDetails>)` - Up to 100 messages in ascending creation order
    /// - `Err(AppError::NotFound)` - Channel does not exist
    /// - `Err(AuthError::AccessDenied)` - Not a member or channel not visible
    pub async fn list(
        &self,
        profile_id: Uuid,
        channel_id: Uuid,
    ) -> Result<Vec<MessageWithDetails>, AppError> {
        let (channel, _, _) = ServerAccess::new(self.db)
            .require_channel(profile_id, channel_id)
            .await?;

        let messages = MessageRepository::new(self.db)
            .get_latest_by_channel(channel.id, HISTORY_LIMIT)
            .await?;

        let message_ids: Vec<Uuid> = messages.iter().map(|m| m.id).collect();
        let mut author_ids: Vec<Uuid> = messages.iter().map(|m| m.author_id).collect();
        author_ids.sort();
        author_ids.dedup();

        let authors: HashMap<Uuid, Profile> = ProfileRepository::new(self.db)
            .get_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        let rows = MessageReactionRepository::new(self.db)
            .get_by_messages(&message_ids)
            .await?;
        let mut reactions = summarize_reactions(&message_ids, &rows);

        Ok(messages
            .into_iter()
            .map(|message| MessageWithDetails {
                author: authors.get(&message.author_id).cloned(),
                reactions: reactions.remove(&message.id).unwrap_or_default(),
                message,
            })
            .collect())
    }

    /// Stores a message from `author` and works out whether it asks for an auto-reply.
    ///
    /// The returned job is not submitted here; the caller hands it to the responder queue
    /// after the response is decided.
    ///
    /// # Returns
    /// - `Ok(SentMessage)` - Stored message with its author, plus the auto-reply job
    /// - `Err(AppError::BadRequest)` - Empty message, bad attachment or bad reply target
    /// - `Err(AppError::NotFound)` - Channel does not exist
    /// - `Err(AuthError::AccessDenied)` - Not a member or channel not visible
    pub async fn send(&self, author: &Profile, draft: MessageDraft) -> Result<SentMessage, AppError> {
        let (channel, _, _) = ServerAccess::new(self.db)
            .require_channel(author.id, draft.channel_id)
            .await?;

        let content = draft.content.trim().to_string();
        if content.is_empty() && draft.attachments.is_empty() {
            return Err(AppError::BadRequest(
                "Message content or attachments are required".to_string(),
            ));
        }

        let attachments = draft
            .attachments
            .into_iter()
            .map(Attachment::from_dto)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::BadRequest)?;

        let repo = MessageRepository::new(self.db);

        if let Some(reply_to_id) = draft.reply_to_id {
            let target = repo.find_by_id(reply_to_id).await?;
            if target.is_none_or(|target| target.channel_id != channel.id) {
                return Err(AppError::BadRequest(
                    "Reply target must be a message in the same channel".to_string(),
                ));
            }
        }

        let message = repo
            .create(CreateMessageParams {
                channel_id: channel.id,
                author_id: author.id,
                content,
                reply_to_id: draft.reply_to_id,
                attachments,
            })
            .await?;

        let auto_reply = auto_reply_for(channel.id, &message.content);

        Ok(SentMessage {
            message: MessageWithDetails {
                message,
                author: Some(author.clone()),
                reactions: Vec::new(),
            },
            auto_reply,
        })
    }

    /// Soft deletes a message.
    ///
    /// The author may always delete their own message. Anyone else needs
    /// `can_manage_messages` in the channel's server, which the owner always holds.
    /// Deleting an already deleted message succeeds without writing.
    ///
    /// # Returns
    /// - `Ok(Message)` - The message in its deleted state
    /// - `Err(AppError::NotFound)` - Message or its channel does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller is not the author and lacks the flag
    pub async fn delete(&self, profile_id: Uuid, message_id: Uuid) -> Result<Message, AppError> {
        let repo = MessageRepository::new(self.db);
        let message = repo
            .find_by_id(message_id)
            .await?
            .ok_or_else(message_not_found)?;

        if message.author_id != profile_id {
            let access = ServerAccess::new(self.db);
            let channel = access.find_channel(message.channel_id).await?;
            let server = access.find_server(channel.server_id).await?;

            access
                .require_permission(profile_id, &server, PermissionFlag::ManageMessages)
                .await?;
        }

        if message.is_deleted {
            return Ok(message);
        }

        Ok(repo.soft_delete(message.id).await?)
    }

    /// Adds the caller's reaction to a message. Adding the same reaction twice is a no-op.
    ///
    /// # Returns
    /// - `Ok(Vec<ReactionSummary>)` - Reaction counts of the message after the change
    /// - `Err(AppError::BadRequest)` - Blank emoji
    /// - `Err(AppError::NotFound)` - Message does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller cannot read the message's channel
    pub async fn add_reaction(
        &self,
        profile_id: Uuid,
        message_id: Uuid,
        emoji: &str,
    ) -> Result<Vec<ReactionSummary>, AppError> {
        let emoji = require_emoji(emoji)?;
        let message = self.readable_message(profile_id, message_id).await?;

        let repo = MessageReactionRepository::new(self.db);
        if !repo.exists(message.id, profile_id, emoji).await? {
            match repo.create(message.id, profile_id, emoji).await {
                Ok(_) => {}
                Err(e) if is_unique_violation(&e) => {}
                Err(e) => return Err(e.into()),
            }
        }

        self.summary(message.id).await
    }

    /// Removes the caller's reaction from a message. Removing a missing reaction is a no-op.
    ///
    /// # Returns
    /// - `Ok(Vec<ReactionSummary>)` - Reaction counts of the message after the change
    /// - `Err(AppError::BadRequest)` - Blank emoji
    /// - `Err(AppError::NotFound)` - Message does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller cannot read the message's channel
    pub async fn remove_reaction(
        &self,
        profile_id: Uuid,
        message_id: Uuid,
        emoji: &str,
    ) -> Result<Vec<ReactionSummary>, AppError> {
        let emoji = require_emoji(emoji)?;
        let message = self.readable_message(profile_id, message_id).await?;

        MessageReactionRepository::new(self.db)
            .delete(message.id, profile_id, emoji)
            .await?;

        self.summary(message.id).await
    }

    async fn readable_message(&self, profile_id: Uuid, message_id: Uuid) -> Result<Message, AppError> {
        let message = MessageRepository::new(self.db)
            .find_by_id(message_id)
            .await?
            .ok_or_else(message_not_found)?;

        ServerAccess::new(self.db)
            .require_channel(profile_id, message.channel_id)
            .await?;

        Ok(message)
    }

    async fn summary(&self, message_id: Uuid) -> Result<Vec<ReactionSummary>, AppError> {
        let rows = MessageReactionRepository::new(self.db)
            .get_by_messages(&[message_id])
            .await?;

        Ok(summarize_reactions(&[message_id], &rows)
            .remove(&message_id)
            .unwrap_or_default())
    }
}

fn message_not_found() -> AppError {
    AppError::NotFound("Message not found".to_string())
}

fn require_emoji(emoji: &str) -> Result<&str, AppError> {
    let emoji = emoji.trim();
    if emoji.is_empty() {
        return Err(AppError::BadRequest("Emoji is required".to_string()));
    }
    Ok(emoji)
}
