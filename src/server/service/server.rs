use rand::Rng;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        channel::ChannelRepository, is_unique_violation, member_role::MemberRoleRepository,
        server::ServerRepository, server_member::ServerMemberRepository,
        server_role::ServerRoleRepository,
    },
    error::AppError,
    model::{
        channel::{ChannelType, CreateChannelParams},
        server::{
            CreateRoleParams, CreateServerParams, PermissionFlag, RolePermissions, Server,
            ServerRole,
        },
    },
    service::access::ServerAccess,
};

const INVITE_CODE_LENGTH: usize = 8;
const INVITE_CODE_ATTEMPTS: usize = 5;

/// Channels every new server starts with: name, type, position.
const SEED_CHANNELS: [(&str, ChannelType, i32); 3] = [
    ("general", ChannelType::Text, 0),
    ("announcements", ChannelType::Announcement, 1),
    ("voice-chat", ChannelType::Voice, 2),
];

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the servers a profile owns or has joined, each once.
    pub async fn list_for_profile(&self, profile_id: Uuid) -> Result<Vec<Server>, AppError> {
        Ok(ServerRepository::new(self.db)
            .get_for_profile(profile_id)
            .await?)
    }

    /// Creates a server owned by `owner_id`.
    ///
    /// Seeds the owner's membership, the default roles (Admin, Moderator, Member) and the
    /// default channels.
    ///
    /// # Arguments
    /// - `owner_id` - Profile creating the server
    /// - `name` - Server name, must not be blank
    /// - `description` - Optional description
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError)` - Database error or no free invite code found
    pub async fn create(
        &self,
        owner_id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<Server, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Server name is required".to_string()));
        }

        let server_repo = ServerRepository::new(self.db);
        let invite_code = self.unused_invite_code().await?;

        let server = server_repo
            .create(CreateServerParams {
                owner_id,
                name,
                description: description
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty()),
                invite_code,
            })
            .await?;

        ServerMemberRepository::new(self.db)
            .create(server.id, owner_id)
            .await?;

        let role_repo = ServerRoleRepository::new(self.db);
        for params in default_roles(server.id) {
            role_repo.create(params).await?;
        }

        let channel_repo = ChannelRepository::new(self.db);
        for (name, channel_type, position) in SEED_CHANNELS {
            channel_repo
                .create(CreateChannelParams {
                    server_id: server.id,
                    name: name.to_string(),
                    channel_type,
                    position,
                    is_private: false,
                    allowed_roles: Vec::new(),
                })
                .await?;
        }

        tracing::info!("Profile {} created server {}", owner_id, server.id);

        Ok(server)
    }

    /// Joins `profile_id` to the server behind `invite_code`.
    ///
    /// The new member receives every default role of the server.
    ///
    /// # Returns
    /// - `Ok(Server)` - The joined server
    /// - `Err(AppError::NotFound)` - `Invalid invite code`
    /// - `Err(AppError::BadRequest)` - `Already a member`, including the owner
    pub async fn join(&self, profile_id: Uuid, invite_code: &str) -> Result<Server, AppError> {
        let server = ServerRepository::new(self.db)
            .find_by_invite_code(invite_code.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid invite code".to_string()))?;

        let member_repo = ServerMemberRepository::new(self.db);
        if server.owner_id == profile_id || member_repo.find(server.id, profile_id).await?.is_some()
        {
            return Err(already_a_member());
        }

        let member = match member_repo.create(server.id, profile_id).await {
            Ok(member) => member,
            Err(e) if is_unique_violation(&e) => return Err(already_a_member()),
            Err(e) => return Err(e.into()),
        };

        let member_role_repo = MemberRoleRepository::new(self.db);
        for role in ServerRoleRepository::new(self.db)
            .get_by_server(server.id)
            .await?
            .into_iter()
            .filter(|role| role.is_default)
        {
            member_role_repo.assign(member.id, role.id).await?;
        }

        Ok(server)
    }

    /// Removes the member with profile `target_profile_id` from a server.
    ///
    /// Checks run in order: server exists, caller holds `can_kick_members` (owner bypass),
    /// target is not the owner, target is a member.
    ///
    /// # Returns
    /// - `Ok(())` - Member removed
    /// - `Err(AppError::NotFound)` - `Server not found` or `Member not found in this server`
    /// - `Err(AuthError::AccessDenied)` - `Not a member` or `Missing permission: can_kick_members`
    /// - `Err(AppError::BadRequest)` - Target is the owner
    pub async fn kick(
        &self,
        actor_id: Uuid,
        server_id: Uuid,
        target_profile_id: Uuid,
    ) -> Result<(), AppError> {
        let access = ServerAccess::new(self.db);
        let server = access.find_server(server_id).await?;

        access
            .require_permission(actor_id, &server, PermissionFlag::KickMembers)
            .await?;

        if target_profile_id == server.owner_id {
            return Err(AppError::BadRequest(
                "Cannot kick the server owner".to_string(),
            ));
        }

        let member_repo = ServerMemberRepository::new(self.db);
        let member = member_repo
            .find(server.id, target_profile_id)
            .await?
            .ok_or_else(member_not_found)?;

        member_repo.delete(member.id).await?;

        tracing::info!(
            "Profile {} kicked profile {} from server {}",
            actor_id,
            target_profile_id,
            server.id
        );

        Ok(())
    }

    /// Gets the roles of a server, highest position first. Members only.
    pub async fn roles(&self, profile_id: Uuid, server_id: Uuid) -> Result<Vec<ServerRole>, AppError> {
        let access = ServerAccess::new(self.db);
        let server = access.find_server(server_id).await?;
        access.require_member(profile_id, &server).await?;

        Ok(ServerRoleRepository::new(self.db)
            .get_by_server(server.id)
            .await?)
    }

    /// Gives the member with profile `target_profile_id` a role. Assigning a held role is a
    /// no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Member holds the role
    /// - `Err(AuthError::AccessDenied)` - Caller lacks `can_manage_roles`
    /// - `Err(AppError::NotFound)` - Server, role or member not found
    pub async fn assign_role(
        &self,
        actor_id: Uuid,
        server_id: Uuid,
        target_profile_id: Uuid,
        role_id: Uuid,
    ) -> Result<(), AppError> {
        let (member_id, role_id) = self
            .resolve_role_target(actor_id, server_id, target_profile_id, role_id)
            .await?;

        let repo = MemberRoleRepository::new(self.db);
        if repo.exists(member_id, role_id).await? {
            return Ok(());
        }

        match repo.assign(member_id, role_id).await {
            Ok(()) => Ok(()),
            Err(e) if is_unique_violation(&e) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Takes a role away from the member with profile `target_profile_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Role removed
    /// - `Err(AuthError::AccessDenied)` - Caller lacks `can_manage_roles`
    /// - `Err(AppError::NotFound)` - Server, role or member not found, or role not held
    pub async fn remove_role(
        &self,
        actor_id: Uuid,
        server_id: Uuid,
        target_profile_id: Uuid,
        role_id: Uuid,
    ) -> Result<(), AppError> {
        let (member_id, role_id) = self
            .resolve_role_target(actor_id, server_id, target_profile_id, role_id)
            .await?;

        if !MemberRoleRepository::new(self.db)
            .remove(member_id, role_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Member does not have this role".to_string(),
            ));
        }

        Ok(())
    }

    async fn resolve_role_target(
        &self,
        actor_id: Uuid,
        server_id: Uuid,
        target_profile_id: Uuid,
        role_id: Uuid,
    ) -> Result<(Uuid, Uuid), AppError> {
        let access = ServerAccess::new(self.db);
        let server = access.find_server(server_id).await?;

        access
            .require_permission(actor_id, &server, PermissionFlag::ManageRoles)
            .await?;

        let role = ServerRoleRepository::new(self.db)
            .find_by_id(role_id)
            .await?
            .filter(|role| role.server_id == server.id)
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        let member = ServerMemberRepository::new(self.db)
            .find(server.id, target_profile_id)
            .await?
            .ok_or_else(member_not_found)?;

        Ok((member.id, role.id))
    }

    async fn unused_invite_code(&self) -> Result<String, AppError> {
        let repo = ServerRepository::new(self.db);

        for _ in 0..INVITE_CODE_ATTEMPTS {
            let code = generate_invite_code();
            if !repo.invite_code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::InternalError(
            "Failed to generate a unique invite code".to_string(),
        ))
    }
}

fn already_a_member() -> AppError {
    AppError::BadRequest("Already a member".to_string())
}

fn member_not_found() -> AppError {
    AppError::NotFound("Member not found in this server".to_string())
}

/// Generates an 8 character alphanumeric invite code.
fn generate_invite_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..INVITE_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

fn default_roles(server_id: Uuid) -> [CreateRoleParams; 3] {
    [
        CreateRoleParams {
            server_id,
            name: "Admin".to_string(),
            color: "#e74c3c".to_string(),
            position: 2,
            permissions: RolePermissions::granting(&PermissionFlag::ALL),
            is_default: false,
        },
        CreateRoleParams {
            server_id,
            name: "Moderator".to_string(),
            color: "#3498db".to_string(),
            position: 1,
            permissions: RolePermissions::granting(&[
                PermissionFlag::KickMembers,
                PermissionFlag::ManageMessages,
            ]),
            is_default: false,
        },
        CreateRoleParams {
            server_id,
            name: "Member".to_string(),
            color: "#99aab5".to_string(),
            position: 0,
            permissions: RolePermissions::granting(&[]),
            is_default: true,
        },
    ]
}
