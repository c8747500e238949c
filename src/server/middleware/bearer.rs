//! Bearer credential extraction.
//!
//! Handlers never read the `Authorization` header directly; they go through
//! [`bearer_token`] so a missing header and a malformed one are told apart the same way
//! everywhere.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::error::auth::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Reads the bearer token from request headers.
///
/// # Returns
/// - `Ok(&str)` - The token following `Bearer `
/// - `Err(AuthError::MissingCredential)` - No `Authorization` header
/// - `Err(AuthError::InvalidCredential)` - Header present but not a non-empty bearer token
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AuthError::MissingCredential);
    };

    let value = value.to_str().map_err(|_| AuthError::InvalidCredential)?;

    match value.strip_prefix(BEARER_PREFIX).map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::InvalidCredential),
    }
}

/// Like [`bearer_token`] but treats any problem as "no token".
pub fn optional_bearer_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).ok()
}
