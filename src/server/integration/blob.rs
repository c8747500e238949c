use async_trait::async_trait;

use crate::server::error::{upstream::UpstreamError, AppError};

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` at `path` on behalf of the caller holding `credential`.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored object
    /// - `Err(AppError)` - Transport failure or the store refused the upload
    async fn upload(
        &self,
        credential: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError>;
}

/// Blob store backed by a Supabase storage bucket.
pub struct SupabaseStorage {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(http: reqwest::Client, base_url: String, anon_key: String, bucket: String) -> Self {
        Self {
            http,
            base_url,
            anon_key,
            bucket,
        }
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}

#[async_trait]
impl BlobStore for SupabaseStorage {
    async fn upload(
        &self,
        credential: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .header("x-upsert", "false")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .bearer_auth(credential)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                service: "storage",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        Ok(self.public_url(path))
    }
}
