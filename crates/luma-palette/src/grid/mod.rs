//! Pixel raster and structural image errors

mod error;
mod pixel_grid;

pub use error::InvalidImage;
pub use pixel_grid::PixelGrid;
