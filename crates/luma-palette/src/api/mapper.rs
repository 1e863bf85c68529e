//! LuminanceMapper -- the primary entry point for recoloring.
//!
//! [`LuminanceMapper`] precomputes the brightness of every eligible palette
//! entry once and then recolors any number of grids against it.

use rayon::prelude::*;

use crate::color::Rgba;
use crate::grid::{InvalidImage, PixelGrid};
use crate::palette::Palette;

/// Grids with at least this many pixels are split across threads.
const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Target number of pixels per parallel work unit. Rounded to whole rows.
const CHUNK_PIXELS: usize = 16 * 1024;

/// One eligible palette entry with its precomputed luminance.
#[derive(Debug, Clone, Copy)]
struct LumaEntry {
    color: Rgba,
    luma: f32,
    /// Position in the palette's full entry list
    index: usize,
}

/// Recolors pixel grids by nearest luminance against one palette.
///
/// For every pixel whose alpha is non-zero, the pixel's RGB is replaced by
/// the RGB of the eligible palette entry with the smallest absolute
/// luminance difference; ties go to the entry listed first. The pixel's own
/// alpha is kept. Fully transparent pixels are not touched at all.
///
/// # Design
///
/// - Constructor takes the [`Palette`] and builds the luminance table once
/// - [`map()`](Self::map) takes `&self`, so one mapper serves many grids
/// - Large grids are processed in row chunks on the rayon pool; the result
///   is identical to the single-threaded pass
///
/// # Example
///
/// ```
/// use luma_palette::{LuminanceMapper, Palette, PixelGrid, Rgba};
///
/// let palette = Palette::new(
///     "duo",
///     vec![Rgba::opaque(10, 10, 10), Rgba::opaque(250, 250, 250)],
/// );
/// let grid = PixelGrid::new(
///     2,
///     1,
///     vec![Rgba::opaque(0, 0, 0), Rgba::new(255, 255, 255, 0)],
/// )
/// .unwrap();
///
/// let out = LuminanceMapper::new(&palette).map(&grid).unwrap();
/// assert_eq!(out.pixels(), &[Rgba::opaque(10, 10, 10), Rgba::new(255, 255, 255, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct LuminanceMapper {
    table: Vec<LumaEntry>,
    parallel_threshold: usize,
}

impl LuminanceMapper {
    /// Build the luminance table for `palette`.
    ///
    /// Entries with alpha 0 are left out. If nothing remains the mapper is a
    /// pass-through.
    pub fn new(palette: &Palette) -> Self {
        let table = palette
            .eligible()
            .map(|(index, color)| LumaEntry {
                color,
                luma: color.luminance(),
                index,
            })
            .collect();
        Self {
            table,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Minimum pixel count for the parallel path.
    ///
    /// `0` or `1` always runs in parallel, `usize::MAX` never does.
    #[inline]
    pub fn parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }

    /// Returns true if no palette entry is eligible, so mapping changes
    /// nothing.
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of eligible palette entries.
    #[inline]
    pub fn eligible_len(&self) -> usize {
        self.table.len()
    }

    fn nearest_entry(&self, luma: f32) -> Option<&LumaEntry> {
        let mut best: Option<(&LumaEntry, f32)> = None;
        for entry in &self.table {
            let dist = (entry.luma - luma).abs();
            // strict < keeps the earliest entry on ties
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((entry, dist)),
            }
        }
        best.map(|(entry, _)| entry)
    }

    /// Eligible palette entry closest in luminance to `luma`.
    ///
    /// `None` when the mapper is a pass-through.
    pub fn nearest(&self, luma: f32) -> Option<Rgba> {
        self.nearest_entry(luma).map(|e| e.color)
    }

    /// Like [`nearest()`](Self::nearest) but returns the entry's position in
    /// the palette's full entry list (ineligible entries included).
    pub fn nearest_index(&self, luma: f32) -> Option<usize> {
        self.nearest_entry(luma).map(|e| e.index)
    }

    #[inline]
    fn recolor_pixel(&self, px: Rgba) -> Rgba {
        if px.is_transparent() {
            return px;
        }
        match self.nearest_entry(px.luminance()) {
            Some(entry) => px.with_rgb_of(entry.color),
            None => px,
        }
    }

    fn recolor_slice(&self, pixels: &mut [Rgba]) {
        for px in pixels {
            *px = self.recolor_pixel(*px);
        }
    }

    /// Recolor `grid` into a new grid of the same dimensions.
    ///
    /// # Errors
    ///
    /// [`InvalidImage::ZeroArea`] if the grid has zero width or height.
    pub fn map(&self, grid: &PixelGrid) -> Result<PixelGrid, InvalidImage> {
        let mut out = grid.clone();
        self.map_in_place(&mut out)?;
        Ok(out)
    }

    /// Recolor `grid` in place.
    ///
    /// # Errors
    ///
    /// [`InvalidImage::ZeroArea`] if the grid has zero width or height. The
    /// grid is left unchanged in that case.
    pub fn map_in_place(&self, grid: &mut PixelGrid) -> Result<(), InvalidImage> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(InvalidImage::ZeroArea { width, height });
        }
        if self.is_passthrough() {
            return Ok(());
        }

        if grid.len() >= self.parallel_threshold {
            let row = width as usize;
            let chunk = (CHUNK_PIXELS / row).max(1) * row;
            grid.pixels_mut()
                .par_chunks_mut(chunk)
                .for_each(|rows| self.recolor_slice(rows));
        } else {
            self.recolor_slice(grid.pixels_mut());
        }
        Ok(())
    }
}

/// Recolor `grid` against `palette` in one call.
///
/// Shorthand for `LuminanceMapper::new(palette).map(grid)`.
///
/// # Errors
///
/// [`InvalidImage::ZeroArea`] if the grid has zero width or height.
pub fn map_to_palette(grid: &PixelGrid, palette: &Palette) -> Result<PixelGrid, InvalidImage> {
    LuminanceMapper::new(palette).map(grid)
}
