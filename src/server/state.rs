//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Identity provider used to verify bearer tokens and manage accounts
//! - Blob store for uploaded attachments
//! - Sender side of the auto-responder queue

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    integration::{blob::BlobStore, identity::IdentityProvider},
    service::responder::ResponderQueue,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - Collaborators are reference-counted trait objects
/// - `ResponderQueue` wraps an mpsc sender
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Identity provider resolving bearer tokens to users.
    pub identity: Arc<dyn IdentityProvider>,

    /// Object storage for message attachments.
    pub blobs: Arc<dyn BlobStore>,

    /// Queue feeding the background auto-responder worker.
    pub responder: ResponderQueue,

    /// Default redirect target for sign up confirmation emails.
    pub email_redirect_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `identity` - Identity provider
    /// - `blobs` - Blob store for uploads
    /// - `responder` - Auto-responder queue sender
    /// - `email_redirect_url` - Redirect used when a sign up omits one
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        identity: Arc<dyn IdentityProvider>,
        blobs: Arc<dyn BlobStore>,
        responder: ResponderQueue,
        email_redirect_url: String,
    ) -> Self {
        Self {
            db,
            identity,
            blobs,
            responder,
            email_redirect_url,
        }
    }
}
