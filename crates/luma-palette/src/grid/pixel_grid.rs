//! Owned RGBA pixel raster.

use super::error::InvalidImage;
use crate::color::Rgba;

/// A width x height raster of [`Rgba`] pixels in row-major order.
///
/// The buffer length always equals `width * height`. Zero-sized grids can
/// be constructed (an empty buffer matches), but the mapper rejects them.
///
/// # Example
///
/// ```
/// use luma_palette::{PixelGrid, Rgba};
///
/// // RGB input gets an opaque alpha channel
/// let grid = PixelGrid::from_rgb_bytes(2, 1, &[0, 0, 0, 255, 255, 255]).unwrap();
/// assert_eq!(grid.get(1, 0), Some(Rgba::opaque(255, 255, 255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

/// Checked `width * height`.
fn area(width: u32, height: u32) -> Result<usize, InvalidImage> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(InvalidImage::TooLarge { width, height })
}

impl PixelGrid {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// [`InvalidImage::LengthMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, InvalidImage> {
        let expected = area(width, height)?;
        if pixels.len() != expected {
            return Err(InvalidImage::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self, InvalidImage> {
        let len = area(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Build from interleaved `[R, G, B, A, ...]` bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, InvalidImage> {
        let expected = area(width, height)?
            .checked_mul(4)
            .ok_or(InvalidImage::TooLarge { width, height })?;
        if bytes.len() != expected {
            return Err(InvalidImage::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved `[R, G, B, ...]` bytes; alpha is set to 255.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, InvalidImage> {
        let expected = area(width, height)?
            .checked_mul(3)
            .ok_or(InvalidImage::TooLarge { width, height })?;
        if bytes.len() != expected {
            return Err(InvalidImage::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|p| Rgba::opaque(p[0], p[1], p[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns true if the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        // chunks(0) panics; a zero-width grid has no rows to yield
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Consume the grid, returning the pixel buffer.
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Interleaved `[R, G, B, A, ...]` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }
}
