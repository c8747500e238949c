use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, AppError},
    integration::identity::{Identity, IdentityProvider},
    middleware::bearer::bearer_token,
    model::profile::Profile,
};

/// The authenticated caller of a request.
#[derive(Debug, Clone)]
pub struct Caller {
    pub identity: Identity,
    pub profile: Profile,
    /// The bearer token, forwarded to collaborators acting on the caller's behalf.
    pub token: String,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a dyn IdentityProvider,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a dyn IdentityProvider) -> Self {
        Self { db, identity }
    }

    /// Resolves the request's bearer token to the caller.
    ///
    /// Runs before any authorization decision: a request that fails here never reaches a
    /// policy resolver.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying `Authorization: Bearer <token>`
    ///
    /// # Returns
    /// - `Ok(Caller)` - Valid token linked to an existing profile
    /// - `Err(AuthError::MissingCredential)` - No authorization header
    /// - `Err(AuthError::InvalidCredential)` - Malformed, expired or revoked token
    /// - `Err(AuthError::ProfileNotFound)` - Valid identity without a profile
    /// - `Err(AppError)` - Identity provider or database failure
    pub async fn require(&self, headers: &HeaderMap) -> Result<Caller, AppError> {
        let token = bearer_token(headers)?;

        let identity = self.identity.verify(token).await?;

        let Some(profile) = ProfileRepository::new(self.db)
            .find_by_user_id(&identity.id)
            .await?
        else {
            return Err(AuthError::ProfileNotFound(identity.id).into());
        };

        Ok(Caller {
            identity,
            profile,
            token: token.to_string(),
        })
    }
}
