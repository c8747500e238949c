use crate::server::{
    error::AppError,
    integration::stub::StubBlobStore,
    model::message::{AttachmentKind, UploadedFile},
    service::storage::StorageService,
};

mod upload;
