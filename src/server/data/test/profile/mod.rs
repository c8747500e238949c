use crate::server::{data::profile::ProfileRepository, model::profile::CreateProfileParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_id;
mod search;
