use chrono::Utc;
use rand::Rng;
use std::path::Path;

use crate::server::{
    error::AppError,
    integration::blob::BlobStore,
    model::message::{Attachment, AttachmentKind, UploadedFile},
};

const OBJECT_PREFIX: &str = "uploads";
const RANDOM_NAME_LENGTH: usize = 12;
const MAX_EXTENSION_LENGTH: usize = 10;

pub struct StorageService<'a> {
    blobs: &'a dyn BlobStore,
}

impl<'a> StorageService<'a> {
    pub fn new(blobs: &'a dyn BlobStore) -> Self {
        Self { blobs }
    }

    /// Uploads a file on behalf of the caller and describes it as a message attachment.
    ///
    /// The object is stored as `uploads/{random}_{unix_millis}.{ext}` so client file names
    /// never collide.
    ///
    /// # Arguments
    /// - `credential` - The caller's bearer token, forwarded to the blob store
    /// - `file` - Received file
    ///
    /// # Returns
    /// - `Ok(Attachment)` - Public URL, original name, kind and size in bytes
    /// - `Err(AppError::BadRequest)` - Empty file
    /// - `Err(AppError)` - Blob store failure
    pub async fn upload(&self, credential: &str, file: UploadedFile) -> Result<Attachment, AppError> {
        if file.bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let path = object_path(&file.file_name, Utc::now().timestamp_millis());
        let size = file.bytes.len() as u64;
        let kind = AttachmentKind::from_content_type(&file.content_type);

        let url = self
            .blobs
            .upload(credential, &path, &file.content_type, file.bytes)
            .await?;

        tracing::debug!("Uploaded {} as {}", file.file_name, path);

        Ok(Attachment {
            url,
            name: file.file_name,
            kind,
            size,
        })
    }
}

/// Builds the object path for an upload.
///
/// The original extension is kept only when it is short and ASCII alphanumeric, so the
/// path is always safe to place in a URL unescaped.
fn object_path(file_name: &str, millis: i64) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();
    let random: String = (0..RANDOM_NAME_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();

    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if is_safe_extension(ext) => {
            format!("{}/{}_{}.{}", OBJECT_PREFIX, random, millis, ext)
        }
        _ => format!("{}/{}_{}", OBJECT_PREFIX, random, millis),
    }
}

fn is_safe_extension(ext: &str) -> bool {
    !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LENGTH
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
}
