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
        message::{AddReactionDto, MessageDto, ReactionSummaryDto, SendMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::message::{MessageDraft, ReactionSummary},
        service::message::MessageService,
        state::AppState,
    },
};

pub static MESSAGE_TAG: &str = "message";

/// GET /api/messages/{id} - Get the latest messages of a channel
///
/// Returns up to 100 messages, oldest first, each with its author's public profile and
/// per-emoji reaction counts.
#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = Uuid, Path, description = "Channel ID")
    ),
    responses(
        (status = 200, description = "Channel history", body = Vec<MessageDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a member or channel not accessible", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let messages = MessageService::new(&state.db)
        .list(caller.profile.id, id)
        .await?;

    let dto: Vec<MessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/messages - Send a message
///
/// A message mentioning `@ai` queues an automatic reply, posted later by the background
/// responder. The response does not wait for it.
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message stored", body = MessageDto),
        (status = 400, description = "Empty message, bad attachment or bad reply target", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a member or channel not accessible", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let sent = MessageService::new(&state.db)
        .send(&caller.profile, MessageDraft::from_dto(payload))
        .await?;

    if let Some(job) = sent.auto_reply {
        state.responder.submit(job);
    }

    Ok((StatusCode::OK, Json(sent.message.into_dto())))
}

/// DELETE /api/messages/{id} - Soft delete a message
///
/// Allowed for the author, the server owner and holders of `can_manage_messages`.
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message deleted", body = MessageResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this message", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    MessageService::new(&state.db)
        .delete(caller.profile.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Message soft-deleted")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/messages/{id}/reactions",
    tag = MESSAGE_TAG,
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    request_body = AddReactionDto,
    responses(
        (status = 200, description = "Reaction counts after the change", body = Vec<ReactionSummaryDto>),
        (status = 400, description = "Blank emoji", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Channel not accessible", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn add_reaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddReactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let summary = MessageService::new(&state.db)
        .add_reaction(caller.profile.id, id, &payload.emoji)
        .await?;

    Ok((StatusCode::OK, Json(summary_dto(summary))))
}

#[utoipa::path(
    delete,
    path = "/api/messages/{id}/reactions/{emoji}",
    tag = MESSAGE_TAG,
    params(
        ("id" = Uuid, Path, description = "Message ID"),
        ("emoji" = String, Path, description = "Emoji to remove, percent-encoded")
    ),
    responses(
        (status = 200, description = "Reaction counts after the change", body = Vec<ReactionSummaryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Channel not accessible", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn remove_reaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, emoji)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let summary = MessageService::new(&state.db)
        .remove_reaction(caller.profile.id, id, &emoji)
        .await?;

    Ok((StatusCode::OK, Json(summary_dto(summary))))
}

fn summary_dto(summary: Vec<ReactionSummary>) -> Vec<ReactionSummaryDto> {
    summary.into_iter().map(ReactionSummary::into_dto).collect()
}
