use crate::server::{data::friendship::FriendshipRepository, model::friendship::FriendshipStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod accept;
mod create;
mod get_accepted_for;
