//! Background auto-responder.
//!
//! Message handlers submit an [`AutoReplyJob`] through [`ResponderQueue`] and return
//! immediately. A single [`ResponderWorker`] task drains the queue, asks the completion
//! service for an answer and posts it in the channel as the AI profile. Worker failures are
//! logged and never reach a client.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use uuid::Uuid;

use crate::server::{
    data::{
        channel::ChannelRepository, is_unique_violation, message::MessageRepository,
        profile::ProfileRepository, server_member::ServerMemberRepository,
    },
    error::AppError,
    integration::completion::TextCompletion,
    model::{
        message::{CreateMessageParams, Message},
        profile::Profile,
    },
    policy::responder::AutoReplyJob,
};

/// Reply posted when the completion service has nothing to say.
pub const FALLBACK_REPLY: &str = "I'm having trouble thinking right now.";

/// Sender side of the auto-responder queue.
#[derive(Clone)]
pub struct ResponderQueue {
    sender: mpsc::Sender<AutoReplyJob>,
}

impl ResponderQueue {
    /// Creates a bounded queue holding at most `capacity` pending jobs.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<AutoReplyJob>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Enqueues a job without waiting.
    ///
    /// # Returns
    /// - `true` - Job accepted
    /// - `false` - Queue full or worker gone; the job is dropped
    pub fn submit(&self, job: AutoReplyJob) -> bool {
        match self.sender.try_send(job) {
            Ok(()) => true,
            Err(TrySendError::Full(job)) => {
                tracing::warn!(
                    "Auto-responder queue full, dropping job for channel {}",
                    job.channel_id
                );
                false
            }
            Err(TrySendError::Closed(job)) => {
                tracing::warn!(
                    "Auto-responder stopped, dropping job for channel {}",
                    job.channel_id
                );
                false
            }
        }
    }
}

pub struct ResponderWorker {
    db: DatabaseConnection,
    completion: Option<Arc<dyn TextCompletion>>,
    ai_username: String,
    ai_profile_id: Option<Uuid>,
}

impl ResponderWorker {
    /// Creates the worker.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `completion` - Completion service; without one every job is skipped
    /// - `ai_username` - Username of the profile replies are posted as
    /// - `ai_profile_id` - Profile used when no profile has `ai_username`
    pub fn new(
        db: DatabaseConnection,
        completion: Option<Arc<dyn TextCompletion>>,
        ai_username: String,
        ai_profile_id: Option<Uuid>,
    ) -> Self {
        Self {
            db,
            completion,
            ai_username,
            ai_profile_id,
        }
    }

    /// Processes jobs until every queue sender is dropped.
    pub async fn run(self, mut receiver: mpsc::Receiver<AutoReplyJob>) {
        tracing::info!("Auto-responder started");

        while let Some(job) = receiver.recv().await {
            match self.process(&job).await {
                Ok(Some(reply)) => {
                    tracing::debug!("Posted auto-reply {} in channel {}", reply.id, job.channel_id)
                }
                Ok(None) => {}
                Err(e) => tracing::error!("Auto-reply for channel {} failed: {}", job.channel_id, e),
            }
        }

        tracing::info!("Auto-responder stopped");
    }

    /// Answers one job.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - The posted reply
    /// - `Ok(None)` - Skipped: no completion service, no AI profile or channel gone
    /// - `Err(AppError)` - Completion or database failure
    pub async fn process(&self, job: &AutoReplyJob) -> Result<Option<Message>, AppError> {
        let Some(completion) = self.completion.as_ref() else {
            return Ok(None);
        };

        let reply = completion
            .complete(&prompt_for(&job.content))
            .await?
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        let Some(ai_profile) = self.ai_profile().await? else {
            tracing::warn!(
                "No profile named {} for auto-replies, skipping",
                self.ai_username
            );
            return Ok(None);
        };

        let Some(channel) = ChannelRepository::new(&self.db)
            .find_by_id(job.channel_id)
            .await?
        else {
            return Ok(None);
        };

        let member_repo = ServerMemberRepository::new(&self.db);
        if member_repo
            .find(channel.server_id, ai_profile.id)
            .await?
            .is_none()
        {
            match member_repo.create(channel.server_id, ai_profile.id).await {
                Ok(_) => {}
                Err(e) if is_unique_violation(&e) => {}
                Err(e) => return Err(e.into()),
            }
        }

        let message = MessageRepository::new(&self.db)
            .create(CreateMessageParams {
                channel_id: channel.id,
                author_id: ai_profile.id,
                content: reply,
                reply_to_id: None,
                attachments: Vec::new(),
            })
            .await?;

        Ok(Some(message))
    }

    async fn ai_profile(&self) -> Result<Option<Profile>, AppError> {
        let repo = ProfileRepository::new(&self.db);

        if let Some(profile) = repo.find_by_username(&self.ai_username).await? {
            return Ok(Some(profile));
        }

        match self.ai_profile_id {
            Some(id) => Ok(repo.find_by_id(id).await?),
            None => Ok(None),
        }
    }
}

fn prompt_for(content: &str) -> String {
    format!(
        "You are NotFox AI, a helpful assistant in a Discord-like chat.\nUser said: \"{}\".\nRespond helpfully and concisely.",
        content
    )
}
