//! HTTP request handlers.
//!
//! Handlers authenticate the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into domain inputs, call one service and convert the result back
//! into response DTOs. Every handler carries a `#[utoipa::path]` so it appears in the
//! OpenAPI document assembled in `router`.

pub mod auth;
pub mod channel;
pub mod friend;
pub mod health;
pub mod message;
pub mod server;
pub mod storage;
pub mod user;
