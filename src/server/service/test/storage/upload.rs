use super::*;

fn file(name: &str, content_type: &str, len: usize) -> UploadedFile {
    UploadedFile {
        file_name: name.to_string(),
        content_type: content_type.to_string(),
        bytes: vec![7; len],
    }
}

/// Tests uploading an image and a document.
///
/// Expected: Ok(Attachment) with the store's URL, original name, size and a kind derived
/// from the content type
#[tokio::test]
async fn describes_uploaded_files() -> Result<(), AppError> {
    let blobs = StubBlobStore::default();
    let service = StorageService::new(&blobs);

    let image = service
        .upload("token", file("cat.png", "image/png", 3))
        .await?;
    let doc = service
        .upload("token", file("notes.txt", "text/plain", 5))
        .await?;

    assert_eq!(image.kind, AttachmentKind::Image);
    assert_eq!(image.name, "cat.png");
    assert_eq!(image.size, 3);
    assert!(image.url.starts_with("https://blobs.test/uploads/"));
    assert!(image.url.ends_with(".png"));
    assert_eq!(doc.kind, AttachmentKind::File);

    let uploads = blobs.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[1].1, "text/plain");
    assert_eq!(uploads[1].2, 5);

    Ok(())
}

/// Tests uploading an empty file.
///
/// Expected: Err(AppError::BadRequest) and nothing reaches the store
#[tokio::test]
async fn rejects_empty_file() -> Result<(), AppError> {
    let blobs = StubBlobStore::default();

    let result = StorageService::new(&blobs)
        .upload("token", file("empty.txt", "text/plain", 0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(blobs.uploads.lock().unwrap().is_empty());

    Ok(())
}

/// Tests uploading a file whose name smuggles URL syntax into its extension.
///
/// Expected: Ok(Attachment) stored under a path without the extension, keeping the
/// client's name only in the attachment metadata
#[tokio::test]
async fn strips_url_syntax_from_object_path() -> Result<(), AppError> {
    let blobs = StubBlobStore::default();

    let attachment = StorageService::new(&blobs)
        .upload("token", file("photo.png?x=1#frag", "image/png", 4))
        .await?;

    let uploads = blobs.uploads.lock().unwrap();
    let path = &uploads[0].0;
    assert!(path.starts_with("uploads/"));
    assert!(!path.contains(['?', '#', '.']));
    assert_eq!(attachment.url, format!("https://blobs.test/{}", path));
    assert_eq!(attachment.name, "photo.png?x=1#frag");

    Ok(())
}
