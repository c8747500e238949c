use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use uuid::Uuid;

use crate::server::{
    data::{channel::ChannelRepository, server_role::ServerRoleRepository},
    error::AppError,
    model::{
        channel::{Channel, ChannelDraft, ChannelType, CreateChannelParams},
        server::PermissionFlag,
    },
    policy::visibility::visible_channels,
    service::access::ServerAccess,
};

pub struct ChannelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the channels of a server the caller can see, ordered by position.
    ///
    /// # Returns
    /// - `Ok(Vec<Channel>)` - Public channels plus private channels the caller may see
    /// - `Err(AppError::NotFound)` - Server does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller is not a member
    pub async fn list_visible(
        &self,
        profile_id: Uuid,
        server_id: Uuid,
    ) -> Result<Vec<Channel>, AppError> {
        let access = ServerAccess::new(self.db);
        let server = access.find_server(server_id).await?;
        let viewer = access.require_member(profile_id, &server).await?;

        let channels = ChannelRepository::new(self.db)
            .get_by_server(server.id)
            .await?;

        Ok(visible_channels(channels, &viewer))
    }

    /// Creates a channel after the last one in the server.
    ///
    /// # Returns
    /// - `Ok(Channel)` - The created channel
    /// - `Err(AuthError::AccessDenied)` - Caller lacks `can_manage_channels`
    /// - `Err(AppError::BadRequest)` - Blank name, unknown type or foreign allowed roles
    pub async fn create(&self, profile_id: Uuid, draft: ChannelDraft) -> Result<Channel, AppError> {
        let access = ServerAccess::new(self.db);
        let server = access.find_server(draft.server_id).await?;

        access
            .require_permission(profile_id, &server, PermissionFlag::ManageChannels)
            .await?;

        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Channel name is required".to_string()));
        }

        let channel_type = match draft.channel_type.as_deref() {
            None => ChannelType::Text,
            Some(value) => value.parse::<ChannelType>().map_err(AppError::BadRequest)?,
        };

        let mut seen = HashSet::new();
        let allowed_roles: Vec<Uuid> = draft
            .allowed_roles
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        let known = ServerRoleRepository::new(self.db)
            .count_in_server(server.id, &allowed_roles)
            .await?;
        if known != allowed_roles.len() as u64 {
            return Err(AppError::BadRequest(
                "Allowed roles must belong to this server".to_string(),
            ));
        }

        let repo = ChannelRepository::new(self.db);
        let position = repo
            .max_position(server.id)
            .await?
            .map(|max| max + 1)
            .unwrap_or(0);

        let channel = repo
            .create(CreateChannelParams {
                server_id: server.id,
                name,
                channel_type,
                position,
                is_private: draft.is_private,
                allowed_roles,
            })
            .await?;

        Ok(channel)
    }

    /// Deletes a channel together with its messages.
    ///
    /// # Returns
    /// - `Ok(())` - Channel deleted
    /// - `Err(AppError::NotFound)` - Channel does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller lacks `can_manage_channels`
    pub async fn delete(&self, profile_id: Uuid, channel_id: Uuid) -> Result<(), AppError> {
        let access = ServerAccess::new(self.db);
        let channel = access.find_channel(channel_id).await?;
        let server = access.find_server(channel.server_id).await?;

        access
            .require_permission(profile_id, &server, PermissionFlag::ManageChannels)
            .await?;

        ChannelRepository::new(self.db).delete(channel.id).await?;

        Ok(())
    }
}
