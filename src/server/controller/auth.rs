use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto},
        auth::{AuthSessionDto, LoginDto, MeDto, RegisterDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, bearer::optional_bearer_token},
        service::auth::{AuthService, Registration},
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// POST /api/auth/register - Create an account and its profile
///
/// The profile's display name starts out equal to the username. When the identity provider
/// requires email confirmation the response carries no session.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account created", body = AuthSessionDto),
        (status = 400, description = "Missing fields, username taken or sign up refused", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let registration = Registration {
        email: payload.email,
        password: payload.password,
        username: payload.username,
        redirect_url: payload.redirect_url,
    };

    let session = AuthService::new(&state.db, state.identity.as_ref())
        .register(registration, &state.email_redirect_url)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// POST /api/auth/login - Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthSessionDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, state.identity.as_ref())
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// POST /api/auth/logout - Revoke the presented session
///
/// Always succeeds. A missing or malformed `Authorization` header is ignored.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageResponseDto)
    ),
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    AuthService::new(&state.db, state.identity.as_ref())
        .logout(optional_bearer_token(&headers))
        .await;

    (
        StatusCode::OK,
        Json(MessageResponseDto::new("Logged out successfully")),
    )
}

/// GET /api/auth/me - Get the caller's identity and profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = MeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MeDto {
            user: caller.identity.raw,
            profile: caller.profile.into_dto(),
        }),
    ))
}
