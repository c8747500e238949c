use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, profile::ProfileRepository},
    error::{upstream::UpstreamError, AppError},
    integration::identity::{AuthSession, IdentityProvider, SignUpRequest},
    model::profile::CreateProfileParams,
};

/// Account registration as submitted by a client.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub username: String,
    pub redirect_url: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a dyn IdentityProvider,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a dyn IdentityProvider) -> Self {
        Self { db, identity }
    }

    /// Registers an account with the identity provider and creates its profile.
    ///
    /// The profile's display name starts out equal to the username.
    ///
    /// # Arguments
    /// - `registration` - Email, password, username and optional confirmation redirect
    /// - `default_redirect` - Redirect used when the registration carries none
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created user, with a session unless email confirmation is pending
    /// - `Err(AppError::BadRequest)` - Missing fields or username already taken
    /// - `Err(AuthError::SignUpFailed)` - Identity provider refused the account
    pub async fn register(
        &self,
        registration: Registration,
        default_redirect: &str,
    ) -> Result<AuthSession, AppError> {
        let email = registration.email.trim().to_string();
        let username = registration.username.trim().to_string();

        if email.is_empty() || registration.password.is_empty() || username.is_empty() {
            return Err(AppError::BadRequest(
                "Email, password and username are required".to_string(),
            ));
        }

        let profile_repo = ProfileRepository::new(self.db);
        if profile_repo.find_by_username(&username).await?.is_some() {
            return Err(username_taken());
        }

        let session = self
            .identity
            .sign_up(SignUpRequest {
                email,
                password: registration.password,
                username: username.clone(),
                redirect_url: registration
                    .redirect_url
                    .unwrap_or_else(|| default_redirect.to_string()),
            })
            .await?;

        let user_id = session
            .user_id()
            .ok_or_else(|| UpstreamError::MalformedResponse {
                service: "auth",
                reason: "sign up response has no user id".to_string(),
            })?
            .to_string();

        let profile = match profile_repo
            .create(CreateProfileParams {
                user_id,
                username: username.clone(),
                display_name: username,
            })
            .await
        {
            Ok(profile) => profile,
            Err(e) if is_unique_violation(&e) => return Err(username_taken()),
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Registered profile {} ({})", profile.id, profile.username);

        Ok(session)
    }

    /// Signs in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        self.identity.sign_in(email.trim(), password).await
    }

    /// Revokes the session behind `token`, if one was presented.
    ///
    /// Logging out never fails: provider errors are logged and dropped.
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token else {
            return;
        };

        if let Err(e) = self.identity.sign_out(token).await {
            tracing::warn!("Failed to revoke session: {}", e);
        }
    }
}

fn username_taken() -> AppError {
    AppError::BadRequest("Username already taken".to_string())
}
