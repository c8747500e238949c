//! Loading a caller's standing in a server and enforcing policy decisions.
//!
//! Every guarded service operation goes through [`ServerAccess`] so that denials carry the
//! same reasons everywhere.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        channel::ChannelRepository, server::ServerRepository,
        server_member::ServerMemberRepository, server_role::ServerRoleRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        channel::Channel,
        server::{PermissionFlag, Server},
    },
    policy::{
        permission::{resolve_permission, Denial},
        visibility::channel_visible,
        Membership, Viewer,
    },
};

/// Reason given when a member cannot see a channel.
const CHANNEL_NOT_ACCESSIBLE: &str = "Channel not accessible";

pub struct ServerAccess<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerAccess<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a server or fails with 404 `Server not found`.
    pub async fn find_server(&self, server_id: Uuid) -> Result<Server, AppError> {
        ServerRepository::new(self.db)
            .find_by_id(server_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))
    }

    /// Gets a channel or fails with 404 `Channel not found`.
    pub async fn find_channel(&self, channel_id: Uuid) -> Result<Channel, AppError> {
        ChannelRepository::new(self.db)
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Channel not found".to_string()))
    }

    /// Builds the viewer for `profile_id` in `server`, loading its membership and roles.
    pub async fn viewer(&self, profile_id: Uuid, server: &Server) -> Result<Viewer, AppError> {
        let membership = match ServerMemberRepository::new(self.db)
            .find(server.id, profile_id)
            .await?
        {
            Some(member) => Some(Membership {
                member_id: member.id,
                roles: ServerRoleRepository::new(self.db)
                    .get_for_member(member.id)
                    .await?,
            }),
            None => None,
        };

        Ok(Viewer::new(profile_id, server, membership))
    }

    /// Requires the caller to be the owner or a member of `server`.
    ///
    /// # Returns
    /// - `Ok(Viewer)` - Caller belongs to the server
    /// - `Err(AuthError::AccessDenied)` - `Not a member`
    pub async fn require_member(
        &self,
        profile_id: Uuid,
        server: &Server,
    ) -> Result<Viewer, AppError> {
        let viewer = self.viewer(profile_id, server).await?;

        if !viewer.is_member() {
            return Err(AuthError::AccessDenied(profile_id, Denial::NotMember.to_string()).into());
        }

        Ok(viewer)
    }

    /// Requires the caller to hold `flag` in `server`.
    ///
    /// # Returns
    /// - `Ok(Viewer)` - Owner, or member holding a role with the flag
    /// - `Err(AuthError::AccessDenied)` - `Not a member` or `Missing permission: <flag>`
    pub async fn require_permission(
        &self,
        profile_id: Uuid,
        server: &Server,
        flag: PermissionFlag,
    ) -> Result<Viewer, AppError> {
        let viewer = self.viewer(profile_id, server).await?;

        match resolve_permission(&viewer, flag).into_result() {
            Ok(grant) => {
                tracing::debug!(
                    "Profile {} holds {} in server {} via {:?}",
                    profile_id,
                    flag,
                    server.id,
                    grant
                );
                Ok(viewer)
            }
            Err(denial) => Err(AuthError::AccessDenied(profile_id, denial.to_string()).into()),
        }
    }

    /// Requires the caller to belong to the channel's server and be able to see the channel.
    ///
    /// # Returns
    /// - `Ok((Channel, Server, Viewer))` - Channel readable by the caller
    /// - `Err(AppError::NotFound)` - Channel or server does not exist
    /// - `Err(AuthError::AccessDenied)` - Not a member, or the channel is private to them
    pub async fn require_channel(
        &self,
        profile_id: Uuid,
        channel_id: Uuid,
    ) -> Result<(Channel, Server, Viewer), AppError> {
        let channel = self.find_channel(channel_id).await?;
        let server = self.find_server(channel.server_id).await?;
        let viewer = self.require_member(profile_id, &server).await?;

        if !channel_visible(&channel, &viewer) {
            return Err(
                AuthError::AccessDenied(profile_id, CHANNEL_NOT_ACCESSIBLE.to_string()).into(),
            );
        }

        Ok((channel, server, viewer))
    }
}
