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
        channel::{ChannelDto, CreateChannelDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::channel::ChannelDraft,
        service::channel::ChannelService, state::AppState,
    },
};

pub static CHANNEL_TAG: &str = "channel";

/// GET /api/servers/{server_id}/channels - Get the channels the caller can see
///
/// Public channels are visible to every member. A private channel is visible to the owner
/// and to holders of one of its allowed roles.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/channels",
    tag = CHANNEL_TAG,
    params(
        ("server_id" = Uuid, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Visible channels by position", body = Vec<ChannelDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_server_channels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(server_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let channels = ChannelService::new(&state.db)
        .list_visible(caller.profile.id, server_id)
        .await?;

    let dto: Vec<ChannelDto> = channels.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/channels",
    tag = CHANNEL_TAG,
    request_body = CreateChannelDto,
    responses(
        (status = 200, description = "Channel created", body = ChannelDto),
        (status = 400, description = "Invalid name, type or allowed roles", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Missing can_manage_channels", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn create_channel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let channel = ChannelService::new(&state.db)
        .create(caller.profile.id, ChannelDraft::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(channel.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/channels/{id}",
    tag = CHANNEL_TAG,
    params(
        ("id" = Uuid, Path, description = "Channel ID")
    ),
    responses(
        (status = 200, description = "Channel deleted", body = MessageResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Missing can_manage_channels", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_channel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    ChannelService::new(&state.db)
        .delete(caller.profile.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Channel deleted successfully")),
    ))
}
