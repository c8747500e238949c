use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain confirmation body, e.g. `{"message": "Friend request sent"}`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponseDto {
    pub message: String,
}

impl MessageResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
}
