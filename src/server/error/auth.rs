use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization` header.
    #[error("No authorization header provided")]
    MissingCredential,

    /// The identity provider rejected the bearer token.
    ///
    /// Covers malformed headers as well as expired or revoked tokens.
    #[error("Invalid or expired token")]
    InvalidCredential,

    /// The token is valid but no profile is linked to the identity.
    ///
    /// # Fields
    /// - Identity provider user id
    #[error("No profile exists for identity {0}")]
    ProfileNotFound(String),

    /// Email and password sign in was refused by the identity provider.
    ///
    /// # Fields
    /// - Message reported by the provider
    #[error("{0}")]
    LoginFailed(String),

    /// Account registration was refused by the identity provider.
    ///
    /// # Fields
    /// - Message reported by the provider
    #[error("{0}")]
    SignUpFailed(String),

    /// The caller is authenticated but not allowed to perform the operation.
    ///
    /// # Fields
    /// - Profile id of the caller
    /// - Client facing reason, e.g. `Missing permission: can_kick_members`
    #[error("Profile {0} denied: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredential` / `InvalidCredential` / `ProfileNotFound` / `LoginFailed` → 401
/// - `SignUpFailed` → 400 with the provider's message
/// - `AccessDenied` → 403 with the stated reason
///
/// Denials are logged at debug level with the caller's profile id.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::MissingCredential | Self::InvalidCredential => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::ProfileNotFound(ref user_id) => {
                tracing::debug!("Authenticated identity {} has no profile", user_id);
                (StatusCode::UNAUTHORIZED, "Profile not found".to_string())
            }
            Self::LoginFailed(message) => (StatusCode::UNAUTHORIZED, message),
            Self::SignUpFailed(message) => (StatusCode::BAD_REQUEST, message),
            Self::AccessDenied(profile_id, reason) => {
                tracing::debug!("Access denied for profile {}: {}", profile_id, reason);
                (StatusCode::FORBIDDEN, reason)
            }
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
