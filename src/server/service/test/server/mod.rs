use super::{denial_reason, grant_flag};
use crate::server::{
    data::{
        channel::ChannelRepository, member_role::MemberRoleRepository,
        server_member::ServerMemberRepository, server_role::ServerRoleRepository,
    },
    error::AppError,
    model::{channel::ChannelType, server::PermissionFlag},
    service::server::ServerService,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod join;
mod roles;
