//! In-memory collaborators for tests.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::server::{
    error::{auth::AuthError, upstream::UpstreamError, AppError},
    integration::{
        blob::BlobStore,
        completion::TextCompletion,
        identity::{AuthSession, Identity, IdentityProvider, SignUpRequest},
    },
};

/// Identity provider accepting a fixed set of tokens.
#[derive(Default)]
pub struct StubIdentity {
    tokens: Mutex<HashMap<String, Identity>>,
    pub signed_out: Mutex<Vec<String>>,
}

impl StubIdentity {
    /// Registers `token` as valid for the identity provider user `user_id`.
    pub fn with_token(self, token: &str, user_id: &str) -> Self {
        self.tokens.lock().unwrap().insert(
            token.to_string(),
            Identity {
                id: user_id.to_string(),
                email: Some(format!("{}@example.com", user_id)),
                raw: json!({ "id": user_id }),
            },
        );
        self
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn verify(&self, token: &str) -> Result<Identity, AppError> {
        self.tokens
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| AuthError::InvalidCredential.into())
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthSession, AppError> {
        if request.password.len() < 6 {
            return Err(AuthError::SignUpFailed(
                "Password should be at least 6 characters".to_string(),
            )
            .into());
        }

        let user_id = format!("auth-{}", request.username);
        Ok(AuthSession {
            user: json!({ "id": user_id, "email": request.email }),
            session: None,
        })
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthSession, AppError> {
        Err(AuthError::LoginFailed(format!("Invalid login credentials for {}", email)).into())
    }

    async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        self.signed_out.lock().unwrap().push(token.to_string());
        Ok(())
    }
}

/// Blob store recording uploads in memory.
#[derive(Default)]
pub struct StubBlobStore {
    pub uploads: Mutex<Vec<(String, String, usize)>>,
}

#[async_trait]
impl BlobStore for StubBlobStore {
    async fn upload(
        &self,
        _credential: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), content_type.to_string(), bytes.len()));
        Ok(format!("https://blobs.test/{}", path))
    }
}

/// Completion service returning a canned answer, or failing when built with `failing()`.
pub struct StubCompletion {
    reply: Option<String>,
    fail: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    pub fn replying(reply: Option<&str>) -> Self {
        Self {
            reply: reply.map(str::to_string),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextCompletion for StubCompletion {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(UpstreamError::Status {
                service: "completion",
                status: 503,
                body: "overloaded".to_string(),
            }
            .into());
        }

        Ok(self.reply.clone())
    }
}
