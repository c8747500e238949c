use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::server::error::{upstream::UpstreamError, AppError};

#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Completes `prompt`.
    ///
    /// # Returns
    /// - `Ok(Some(text))` - The service produced text
    /// - `Ok(None)` - The service answered without any text
    /// - `Err(AppError)` - Transport failure or non-success status
    async fn complete(&self, prompt: &str) -> Result<Option<String>, AppError>;
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if non-empty.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.trim().is_empty())
    }
}

/// Text completion backed by the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            api_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);

        tracing::debug!("Requesting completion from model {}", self.model);

        let response = self
            .http
            .post(url)
            .query(&[("key", &self.api_key)])
            .json(&GenerateContentRequest {
                contents: vec![RequestContent {
                    parts: vec![RequestPart { text: prompt }],
                }],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                service: "completion",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        let body = response.json::<GenerateContentResponse>().await?;

        Ok(body.first_text())
    }
}
