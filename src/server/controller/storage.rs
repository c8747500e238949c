use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, message::AttachmentDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::message::UploadedFile,
        service::storage::StorageService, state::AppState,
    },
};

pub static STORAGE_TAG: &str = "storage";

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// POST /api/storage/upload - Upload a message attachment
///
/// Expects a multipart body with the file in the `file` field. The object is stored on
/// behalf of the caller and described the way messages reference attachments.
#[utoipa::path(
    post,
    path = "/api/storage/upload",
    tag = STORAGE_TAG,
    request_body(content_type = "multipart/form-data", description = "Multipart body with a `file` field"),
    responses(
        (status = 200, description = "Uploaded", body = AttachmentDto),
        (status = 400, description = "No file uploaded", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("BearerAuth" = [])),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, state.identity.as_ref())
        .require(&headers)
        .await?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(FILE_FIELD).to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        upload = Some(UploadedFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let file = upload.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let attachment = StorageService::new(state.blobs.as_ref())
        .upload(&caller.token, file)
        .await?;

    Ok((StatusCode::OK, Json(attachment.into_dto())))
}
