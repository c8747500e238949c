//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, upstream::UpstreamError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while generic variants
/// provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401 / 403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when a call to the identity provider,
    /// blob store or completion service fails at the transport level.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// An external collaborator answered with an unexpected status or body.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// Failed to bind or serve the listening socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A server, channel, message, profile or role does not exist.
    ///
    /// Results in 404 Not Found; the message is returned verbatim.
    #[error("{0}")]
    NotFound(String),

    /// Missing input, failed validation, or a disallowed state transition such as a
    /// duplicate friend request or joining a server twice.
    ///
    /// Results in 400 Bad Request; the message is returned verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure with a message meant for the logs only.
    ///
    /// Results in 500 Internal Server Error with a generic body.
    #[error("{0}")]
    InternalError(String),
}

/// Maps the error taxonomy onto HTTP responses with an `{ "error": ... }` body.
///
/// Client-facing variants carry their message through; everything else is logged and
/// replaced by a generic message.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 401 / 403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, UpstreamErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers with a generic 500 body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
