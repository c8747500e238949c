use crate::server::{
    data::channel::ChannelRepository,
    model::channel::{ChannelType, CreateChannelParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_server;
