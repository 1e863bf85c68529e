//! Structural image errors

use std::fmt;

/// The pixel data cannot be processed.
///
/// Raised when a grid has no pixels or when a raw buffer does not match the
/// stated dimensions. These are the only failures of the mapping pipeline;
/// palette oddities (unknown names, no eligible entries) are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidImage {
    /// Width or height is zero
    ZeroArea {
        /// Grid width in pixels
        width: u32,
        /// Grid height in pixels
        height: u32,
    },
    /// Buffer length does not equal width * height * channels
    LengthMismatch {
        /// Expected number of elements
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },
    /// width * height overflows `usize`
    TooLarge {
        /// Grid width in pixels
        width: u32,
        /// Grid height in pixels
        height: u32,
    },
}

impl fmt::Display for InvalidImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidImage::ZeroArea { width, height } => {
                write!(f, "image has zero area ({}x{})", width, height)
            }
            InvalidImage::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            InvalidImage::TooLarge { width, height } => {
                write!(f, "image dimensions too large ({}x{})", width, height)
            }
        }
    }
}

impl std::error::Error for InvalidImage {}
