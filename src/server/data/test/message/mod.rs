use crate::server::{
    data::message::MessageRepository,
    model::message::{Attachment, AttachmentKind, CreateMessageParams, DELETED_MESSAGE_CONTENT},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_latest_by_channel;
