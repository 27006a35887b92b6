use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Message returned by `/detect` for every outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("No files uploaded")]
    NoFiles,

    #[error("Error parsing form data")]
    Multipart(String),

    /// At least one uploaded file could not be processed.
    #[error("Error processing files.")]
    Processing { failed: usize },

    #[error("Not found")]
    NotFound,

    #[error("Failed to read static asset")]
    Asset(#[source] std::io::Error),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NoFiles => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Multipart(_) | ServerError::Processing { .. } | ServerError::Asset(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::Multipart(detail) => warn!(error = %detail, "Failed to parse form data"),
            ServerError::Processing { failed } => warn!(failed, "Upload batch failed"),
            ServerError::Asset(e) => warn!(error = %e, "Failed to read static asset"),
            ServerError::NoFiles | ServerError::NotFound => {}
        }

        let status = self.status_code();
        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
