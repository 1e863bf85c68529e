use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::{ProcessedImage, RecolorService, TemplateService};

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the palette name
pub const PALETTE_FIELD: &str = "palette_choice";

/// Failure in the browser form flow, rendered as an HTML error page
///
/// Falls back to the JSON error body when the error page itself cannot be
/// rendered.
pub struct PageError {
    error: ApiError,
    templates: Arc<TemplateService>,
}

impl PageError {
    fn new(error: impl Into<ApiError>, templates: &Arc<TemplateService>) -> Self {
        Self {
            error: error.into(),
            templates: templates.clone(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        match self
            .templates
            .render_error(status.as_u16(), &self.error.message())
        {
            Ok(html) => {
                self.error.log();
                (status, Html(html)).into_response()
            }
            Err(e) => {
                tracing::error!(%e, "Failed to render error page");
                self.error.into_response()
            }
        }
    }
}

/// Upload form
pub async fn handle_index(
    State(recolor): State<Arc<RecolorService>>,
    State(templates): State<Arc<TemplateService>>,
) -> Result<Html<String>, PageError> {
    templates
        .render_index(recolor.registry())
        .map(Html)
        .map_err(|e| PageError::new(e, &templates))
}

/// Recolor an uploaded image and show the result page
///
/// Expects `multipart/form-data` with a `file` part and an optional
/// `palette_choice` part. Unknown or missing palette names use the default.
pub async fn handle_upload(
    State(recolor): State<Arc<RecolorService>>,
    State(templates): State<Arc<TemplateService>>,
    multipart: Multipart,
) -> Result<Html<String>, PageError> {
    let processed = receive_upload(&recolor, multipart)
        .await
        .map_err(|e| PageError::new(e, &templates))?;

    templates
        .render_result(&processed)
        .map(Html)
        .map_err(|e| PageError::new(e, &templates))
}

async fn receive_upload(
    recolor: &RecolorService,
    mut multipart: Multipart,
) -> Result<ProcessedImage, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut palette_choice = String::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FILE_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((filename, bytes.to_vec()));
            }
            PALETTE_FIELD => {
                palette_choice = field.text().await.map_err(multipart_error)?;
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown form field");
            }
        }
    }

    // Browsers submit an empty part with an empty filename when nothing was chosen
    let (filename, bytes) = match file {
        Some((filename, bytes)) if !filename.is_empty() && !bytes.is_empty() => (filename, bytes),
        _ => return Err(ApiError::MissingField(FILE_FIELD)),
    };

    tracing::info!(
        filename = %filename,
        size = bytes.len(),
        palette = %palette_choice,
        "Upload received"
    );

    recolor
        .process_upload(&filename, bytes, palette_choice.trim())
        .await
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::BadRequest(e.body_text())
    }
}
