use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use url::Url;

use crate::{
    model::auth::AuthSessionDto,
    server::{
        error::{auth::AuthError, upstream::UpstreamError, AppError},
        integration::error_message,
    },
};

/// Identity as reported by the identity provider for a valid bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Provider user id, linked to exactly one profile.
    pub id: String,
    pub email: Option<String>,
    /// Full user object as returned by the provider.
    pub raw: Value,
}

/// User and optional session returned by sign up or sign in.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: Value,
    pub session: Option<Value>,
}

impl AuthSession {
    /// Builds a session from a token endpoint response, which embeds the user.
    ///
    /// A body without `access_token` is a bare user object (sign up awaiting email
    /// confirmation) and yields no session.
    pub fn from_response(body: Value) -> Self {
        if body.get("access_token").is_some() {
            let user = body.get("user").cloned().unwrap_or(Value::Null);
            Self {
                user,
                session: Some(body),
            }
        } else {
            Self {
                user: body,
                session: None,
            }
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.get("id").and_then(Value::as_str)
    }

    pub fn into_dto(self) -> AuthSessionDto {
        AuthSessionDto {
            user: self.user,
            session: self.session,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub redirect_url: String,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a bearer token to an identity.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Token is valid
    /// - `Err(AuthError::InvalidCredential)` - Token is malformed, expired or revoked
    /// - `Err(AppError)` - Provider unreachable or answered with a server error
    async fn verify(&self, token: &str) -> Result<Identity, AppError>;

    /// Registers an account with `username` stored as user metadata.
    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthSession, AppError>;

    /// Signs in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError>;

    /// Revokes the session behind `token`.
    async fn sign_out(&self, token: &str) -> Result<(), AppError>;
}

/// Identity provider backed by the Supabase auth REST API.
pub struct SupabaseIdentity {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseIdentity {
    pub fn new(http: reqwest::Client, base_url: String, anon_key: String) -> Self {
        Self {
            http,
            base_url,
            anon_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Url::parse(&format!("{}/auth/v1/{}", self.base_url, path))
            .map_err(|e| AppError::InternalError(format!("Invalid auth endpoint: {}", e)))
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    async fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let response = self
            .http
            .get(self.endpoint("user")?)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            return Err(AuthError::InvalidCredential.into());
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                service: "auth",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        let raw = response.json::<Value>().await?;
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| UpstreamError::MalformedResponse {
                service: "auth",
                reason: "user object without id".to_string(),
            })?
            .to_string();
        let email = raw.get("email").and_then(Value::as_str).map(str::to_string);

        Ok(Identity { id, email, raw })
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthSession, AppError> {
        let mut url = self.endpoint("signup")?;
        url.query_pairs_mut()
            .append_pair("redirect_to", &request.redirect_url);

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&json!({
                "email": request.email,
                "password": request.password,
                "data": {
                    "username": request.username,
                    "display_name": request.username,
                },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.is_server_error() {
                return Err(UpstreamError::Status {
                    service: "auth",
                    status: status.as_u16(),
                    body,
                }
                .into());
            }
            return Err(AuthError::SignUpFailed(error_message(&body)).into());
        }

        Ok(AuthSession::from_response(response.json::<Value>().await?))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.is_server_error() {
                return Err(UpstreamError::Status {
                    service: "auth",
                    status: status.as_u16(),
                    body,
                }
                .into());
            }
            return Err(AuthError::LoginFailed(error_message(&body)).into());
        }

        Ok(AuthSession::from_response(response.json::<Value>().await?))
    }

    async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.endpoint("logout")?)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        Err(UpstreamError::Status {
            service: "auth",
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }
        .into())
    }
}
