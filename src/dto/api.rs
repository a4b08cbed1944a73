use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body: `{ "error": "<message>" }`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Static confirmation payload for operations without a resource body
/// (deletes, logout, token flows).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
