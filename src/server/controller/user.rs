use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, profile::ProfileDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring matched against username and display name
    #[serde(default)]
    pub query: String,
}

/// GET /api/users/search - Find profiles by username or display name
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = USER_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Up to 10 matching profiles", body = Vec<ProfileDto>),
        (status = 400, description = "Blank query", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn search_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let profiles = UserService::new(&state.db).search(&search.query).await?;

    let dto: Vec<ProfileDto> = profiles.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
