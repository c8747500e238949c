use super::{denial_reason, grant_flag};
use crate::{
    model::message::AttachmentDto,
    server::{
        data::message::MessageRepository,
        error::AppError,
        model::{
            message::{MessageDraft, DELETED_MESSAGE_CONTENT},
            profile::Profile,
        },
        service::message::MessageService,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod list;
mod reaction;
mod send;

fn draft(channel_id: Uuid, content: &str) -> MessageDraft {
    MessageDraft {
        channel_id,
        content: content.to_string(),
        reply_to_id: None,
        attachments: Vec::new(),
    }
}
