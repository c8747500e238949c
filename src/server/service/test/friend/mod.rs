use super::denial_reason;
use crate::server::{error::AppError, service::friend::FriendService};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod accept;
mod scenario;
