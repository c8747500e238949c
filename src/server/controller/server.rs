use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto},
        server::{CreateServerDto, JoinServerDto, ServerDto, ServerRoleDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::server::ServerService,
        state::AppState,
    },
};

pub static SERVER_TAG: &str = "server";

/// GET /api/servers - Get the servers the caller owns or has joined
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Servers of the caller, each once", body = Vec<ServerDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let servers = ServerService::new(&state.db)
        .list_for_profile(caller.profile.id)
        .await?;

    let dto: Vec<ServerDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/servers - Create a server owned by the caller
///
/// Seeds the owner's membership, default roles and default channels.
#[utoipa::path(
    post,
    path = "/api/servers",
    tag = SERVER_TAG,
    request_body = CreateServerDto,
    responses(
        (status = 200, description = "Server created", body = ServerDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn create_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let server = ServerService::new(&state.db)
        .create(caller.profile.id, payload.name, payload.description)
        .await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// POST /api/servers/join - Join a server through its invite code
#[utoipa::path(
    post,
    path = "/api/servers/join",
    tag = SERVER_TAG,
    request_body = JoinServerDto,
    responses(
        (status = 200, description = "Joined", body = ServerDto),
        (status = 400, description = "Already a member", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Invalid invite code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn join_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JoinServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let server = ServerService::new(&state.db)
        .join(caller.profile.id, &payload.invite_code)
        .await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// DELETE /api/servers/{server_id}/members/{profile_id} - Kick a member
///
/// Requires `can_kick_members`; the owner always holds it. The owner cannot be kicked.
#[utoipa::path(
    delete,
    path = "/api/servers/{server_id}/members/{profile_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = Uuid, Path, description = "Server ID"),
        ("profile_id" = Uuid, Path, description = "Profile ID of the member to kick")
    ),
    responses(
        (status = 200, description = "Member kicked", body = MessageResponseDto),
        (status = 400, description = "Target is the owner", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a member or missing permission", body = ErrorDto),
        (status = 404, description = "Server or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn kick_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((server_id, profile_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    ServerService::new(&state.db)
        .kick(caller.profile.id, server_id, profile_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Member kicked successfully")),
    ))
}

/// GET /api/servers/{server_id}/roles - Get the roles of a server
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/roles",
    tag = SERVER_TAG,
    params(
        ("server_id" = Uuid, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Roles, highest position first", body = Vec<ServerRoleDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_server_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(server_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let roles = ServerService::new(&state.db)
        .roles(caller.profile.id, server_id)
        .await?;

    let dto: Vec<ServerRoleDto> = roles.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// PUT /api/servers/{server_id}/members/{profile_id}/roles/{role_id} - Assign a role
#[utoipa::path(
    put,
    path = "/api/servers/{server_id}/members/{profile_id}/roles/{role_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = Uuid, Path, description = "Server ID"),
        ("profile_id" = Uuid, Path, description = "Profile ID of the member"),
        ("role_id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Member holds the role", body = MessageResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Missing can_manage_roles", body = ErrorDto),
        (status = 404, description = "Server, role or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn assign_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((server_id, profile_id, role_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    ServerService::new(&state.db)
        .assign_role(caller.profile.id, server_id, profile_id, role_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageResponseDto::new("Role assigned"))))
}

/// DELETE /api/servers/{server_id}/members/{profile_id}/roles/{role_id} - Remove a role
#[utoipa::path(
    delete,
    path = "/api/servers/{server_id}/members/{profile_id}/roles/{role_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = Uuid, Path, description = "Server ID"),
        ("profile_id" = Uuid, Path, description = "Profile ID of the member"),
        ("role_id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role removed", body = MessageResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Missing can_manage_roles", body = ErrorDto),
        (status = 404, description = "Server, role, member or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn remove_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((server_id, profile_id, role_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    ServerService::new(&state.db)
        .remove_role(caller.profile.id, server_id, profile_id, role_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageResponseDto::new("Role removed"))))
}
