use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use luma_palette::InvalidImage;
use serde_json::json;
use thiserror::Error;

use crate::services::template_service::TemplateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Invalid upload: {0}")]
    BadRequest(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Upload exceeds the size limit")]
    PayloadTooLarge,

    #[error("Rendering error: {0}")]
    Render(RenderError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_)
            | ApiError::InvalidFilename(_)
            | ApiError::BadRequest(_)
            | ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Render(_) | ApiError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to clients. Server faults drop the wrapper prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::Render(e) => e.to_string(),
            ApiError::Template(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    /// Log at `error` for server faults and `warn` for rejected input.
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, error = %self.message(), "Request failed");
        } else {
            tracing::warn!(%status, error = %self.message(), "Request rejected");
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        match e {
            // Bad input, not a server fault
            RenderError::Decode(_) | RenderError::InvalidImage(_) => {
                ApiError::InvalidImage(e.to_string())
            }
            other => ApiError::Render(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("{0}")]
    InvalidImage(#[from] InvalidImage),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Recolor task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.message(),
        }));

        (status, body).into_response()
    }
}
