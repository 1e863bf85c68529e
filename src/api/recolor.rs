use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::services::RecolorService;

/// Header naming the palette that was applied
pub const PALETTE_HEADER: &str = "x-palette";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecolorQuery {
    /// Palette name; unknown or missing names use the default palette
    pub palette: Option<String>,
}

/// Recolor an image
///
/// The request body is the encoded image (PNG, JPEG, GIF, BMP, WebP).
/// The response is the recolored image as PNG. Nothing is stored.
#[utoipa::path(
    post,
    path = "/api/recolor",
    params(RecolorQuery),
    request_body(
        content = Vec<u8>,
        content_type = "application/octet-stream",
        description = "Encoded image (PNG, JPEG, GIF, BMP, WebP)"
    ),
    responses(
        (status = 200, description = "Recolored PNG image", content_type = "image/png"),
        (status = 400, description = "Body is empty or not a decodable image"),
        (status = 413, description = "Body exceeds the upload limit"),
    ),
    tag = "Recolor"
)]
pub async fn handle_recolor(
    State(recolor): State<Arc<RecolorService>>,
    Query(query): Query<RecolorQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    if body.is_empty() {
        return Err(ApiError::MissingField("body"));
    }

    let palette = query.palette.unwrap_or_default();
    let output = recolor
        .recolor_in_blocking_context(body.to_vec(), palette)
        .await?;

    let mut response = ([(header::CONTENT_TYPE, "image/png")], output.png_bytes).into_response();
    match HeaderValue::try_from(output.palette) {
        Ok(value) => {
            response.headers_mut().insert(PALETTE_HEADER, value);
        }
        Err(e) => tracing::warn!(%e, "Palette name not usable as a header value"),
    }

    Ok(response)
}
