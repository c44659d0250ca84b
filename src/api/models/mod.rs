//! API request/response models.

pub mod citas;
pub mod doctores;
pub mod pacientes;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON success envelope returned by every handler: `{message, data?}`.
///
/// `data` is omitted for operations that return nothing (delete).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}
