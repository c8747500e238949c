use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto},
        friend::{AcceptFriendDto, FriendDto, FriendRequestDto, PendingRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::friend::FriendService,
        state::AppState,
    },
};

pub static FRIEND_TAG: &str = "friend";

/// POST /api/friends/request - Send a friend request
///
/// Rejected when any record already exists for the pair, in either direction.
#[utoipa::path(
    post,
    path = "/api/friends/request",
    tag = FRIEND_TAG,
    request_body = FriendRequestDto,
    responses(
        (status = 200, description = "Request sent", body = MessageResponseDto),
        (status = 400, description = "Self request, already pending or already friends", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn send_friend_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FriendRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    FriendService::new(&state.db)
        .send_request(caller.profile.id, payload.target_user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Friend request sent")),
    ))
}

/// POST /api/friends/accept - Accept a pending request addressed to the caller
#[utoipa::path(
    post,
    path = "/api/friends/accept",
    tag = FRIEND_TAG,
    request_body = AcceptFriendDto,
    responses(
        (status = 200, description = "Request accepted", body = MessageResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the recipient", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn accept_friend_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AcceptFriendDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    FriendService::new(&state.db)
        .accept(caller.profile.id, payload.request_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Friend request accepted")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/friends",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Accepted friends", body = Vec<FriendDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let friends = FriendService::new(&state.db)
        .friends(caller.profile.id)
        .await?;

    let dto: Vec<FriendDto> = friends.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/friends/pending",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Incoming pending requests", body = Vec<PendingRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn get_pending_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let requests = FriendService::new(&state.db)
        .pending(caller.profile.id)
        .await?;

    let dto: Vec<PendingRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
