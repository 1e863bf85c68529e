//! Unified error type for the luma-palette public API.
//!
//! [`LumaError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::grid::InvalidImage;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the luma-palette public API.
///
/// # Example
///
/// ```
/// use luma_palette::{map_to_palette, LumaError, Palette, PixelGrid};
///
/// fn recolor(bytes: &[u8], w: u32, h: u32) -> Result<PixelGrid, LumaError> {
///     let palette = Palette::from_hex("duo", &["#000000", "#FFFFFF"])?;
///     let grid = PixelGrid::from_rgba_bytes(w, h, bytes)?;
///     Ok(map_to_palette(&grid, &palette)?)
/// }
///
/// assert!(recolor(&[0; 8], 2, 1).is_ok());
/// assert!(matches!(recolor(&[0; 7], 2, 1), Err(LumaError::InvalidImage(_))));
/// ```
#[derive(Debug)]
pub enum LumaError {
    /// Zero-area grid or a buffer that does not match its dimensions
    InvalidImage(InvalidImage),
    /// Palette construction or registration error
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
}

impl fmt::Display for LumaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LumaError::InvalidImage(err) => write!(f, "invalid image: {}", err),
            LumaError::Palette(err) => write!(f, "palette error: {}", err),
            LumaError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for LumaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LumaError::InvalidImage(err) => Some(err),
            LumaError::Palette(err) => Some(err),
            LumaError::ParseColor(err) => Some(err),
        }
    }
}

impl From<InvalidImage> for LumaError {
    fn from(err: InvalidImage) -> Self {
        LumaError::InvalidImage(err)
    }
}

impl From<PaletteError> for LumaError {
    fn from(err: PaletteError) -> Self {
        LumaError::Palette(err)
    }
}

impl From<ParseColorError> for LumaError {
    fn from(err: ParseColorError) -> Self {
        LumaError::ParseColor(err)
    }
}
