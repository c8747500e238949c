use crate::server::data::server::ServerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_invite_code;
