//! Image decoding and PNG encoding around the core pixel grid.
//!
//! Decoding accepts anything the `image` crate reads and always yields
//! 8-bit RGBA. Encoding always writes 8-bit RGBA PNG, then recompresses it
//! losslessly with oxipng.

use luma_palette::{InvalidImage, PixelGrid};
use std::io::Cursor;

use crate::error::RenderError;

/// Decode an encoded image (PNG, JPEG, GIF, BMP, WebP, ...) into RGBA pixels.
///
/// Sources without an alpha channel come out fully opaque. Animated formats
/// yield their first frame.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, RenderError> {
    let img = image::load_from_memory(bytes).map_err(|e| RenderError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!(
        width,
        height,
        source_color = ?img.color(),
        "Decoded image"
    );

    Ok(PixelGrid::from_rgba_bytes(width, height, rgba.as_raw())?)
}

/// Encode a pixel grid as an optimized 8-bit RGBA PNG.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, RenderError> {
    if grid.is_empty() {
        return Err(InvalidImage::ZeroArea {
            width: grid.width(),
            height: grid.height(),
        }
        .into());
    }

    let data = grid.to_rgba_bytes();

    // Fast settings; oxipng does the real compression
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, grid.width(), grid.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();
    let raw_len = png_bytes.len();

    // optimize_alpha must stay off: it rewrites RGB under alpha 0, which
    // would break the untouched-transparent-pixel guarantee
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        raw_bytes = raw_len,
        optimized_bytes = optimized.len(),
        "Encoded PNG"
    );

    Ok(optimized)
}
