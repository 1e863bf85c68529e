use luma_palette::{LuminanceMapper, PaletteRegistry};
use std::sync::Arc;
use std::time::Instant;

use crate::error::{ApiError, RenderError};
use crate::rendering::{decode_image, encode_png};
use crate::services::storage::{output_name, sanitize_filename, Storage};

/// Result of recoloring one image in memory
#[derive(Debug, Clone)]
pub struct RecolorOutput {
    pub png_bytes: Vec<u8>,
    /// Palette actually used, after falling back from unknown names
    pub palette: String,
    pub width: u32,
    pub height: u32,
}

/// A recolored upload that has been written to the processed directory
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProcessedImage {
    /// Sanitized name the original was stored under
    pub original: String,
    /// File name inside the processed directory
    pub filename: String,
    pub palette: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

/// Decode, recolor and encode images against the palette registry
pub struct RecolorService {
    registry: Arc<PaletteRegistry>,
    storage: Storage,
}

impl RecolorService {
    pub fn new(registry: Arc<PaletteRegistry>, storage: Storage) -> Self {
        Self { registry, storage }
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Recolor an encoded image with the named palette and return PNG bytes.
    ///
    /// Unknown palette names use the registry default. CPU-bound; async
    /// callers should go through [`Self::recolor_in_blocking_context`].
    pub fn recolor_bytes(
        &self,
        bytes: &[u8],
        palette_name: &str,
    ) -> Result<RecolorOutput, RenderError> {
        recolor_image(&self.registry, bytes, palette_name)
    }

    /// Run [`Self::recolor_bytes`] on the blocking thread pool.
    pub async fn recolor_in_blocking_context(
        &self,
        bytes: Vec<u8>,
        palette_name: String,
    ) -> Result<RecolorOutput, RenderError> {
        let registry = self.registry.clone();

        tokio::task::spawn_blocking(move || recolor_image(&registry, &bytes, &palette_name))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }

    /// Store an uploaded image, recolor it, and write the PNG result.
    ///
    /// Storage write failures surface as [`RenderError::Io`].
    pub async fn process_upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        palette_name: &str,
    ) -> Result<ProcessedImage, ApiError> {
        let original = sanitize_filename(filename)
            .ok_or_else(|| ApiError::InvalidFilename(filename.to_string()))?;

        self.storage
            .save_upload(&original, &bytes)
            .await
            .map_err(RenderError::Io)?;

        let output = self
            .recolor_in_blocking_context(bytes, palette_name.to_string())
            .await?;

        let out_name = output_name(&original);
        self.storage
            .save_processed(&out_name, &output.png_bytes)
            .await
            .map_err(RenderError::Io)?;

        tracing::info!(
            original = %original,
            output = %out_name,
            palette = %output.palette,
            size = output.png_bytes.len(),
            "Processed upload"
        );

        Ok(ProcessedImage {
            original,
            filename: out_name,
            palette: output.palette,
            width: output.width,
            height: output.height,
            size_bytes: output.png_bytes.len(),
        })
    }
}

/// Decode `bytes`, map them onto the named palette and encode the result as
/// PNG. Unknown names resolve to the registry default.
///
/// Needs nothing but the registry, so one-shot tools can call it without a
/// [`RecolorService`].
pub fn recolor_image(
    registry: &PaletteRegistry,
    bytes: &[u8],
    palette_name: &str,
) -> Result<RecolorOutput, RenderError> {
    let start = Instant::now();

    let palette = registry.resolve(palette_name);
    if palette.name() != palette_name {
        tracing::debug!(
            requested = %palette_name,
            using = %palette.name(),
            "Unknown palette, using default"
        );
    }

    let grid = decode_image(bytes)?;
    let mapped = LuminanceMapper::new(palette).map(&grid)?;
    let png_bytes = encode_png(&mapped)?;

    tracing::info!(
        palette = %palette.name(),
        width = mapped.width(),
        height = mapped.height(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Recolored image"
    );

    Ok(RecolorOutput {
        png_bytes,
        palette: palette.name().to_string(),
        width: mapped.width(),
        height: mapped.height(),
    })
}
