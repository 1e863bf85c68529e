#![allow(clippy::module_inception)]

//! luma-palette: brightness-preserving palette recoloring
//!
//! This library maps every pixel of an RGBA image onto the palette entry
//! whose brightness is closest to the pixel's own, keeping transparency
//! untouched. It is the pure core of the `palettize` service: no I/O, no
//! global state, deterministic output.
//!
//! # Quick Start
//!
//! ```
//! use luma_palette::{map_to_palette, resolve_builtin, PixelGrid, Rgba};
//!
//! let grid = PixelGrid::new(
//!     2,
//!     1,
//!     vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)],
//! )
//! .unwrap();
//!
//! let out = map_to_palette(&grid, resolve_builtin("Gray")).unwrap();
//! assert_eq!(out.get(0, 0), Some(Rgba::opaque(30, 30, 30)));
//! assert_eq!(out.get(1, 0), Some(Rgba::opaque(220, 220, 220)));
//! ```
//!
//! # Matching Rule
//!
//! ```text
//! luma(r, g, b) = 0.299*r + 0.587*g + 0.114*b
//!
//! for each pixel p:
//!     p.a == 0             -> p unchanged
//!     no eligible entries  -> p unchanged
//!     otherwise            -> p.rgb = argmin_e |luma(e) - luma(p)|, p.a kept
//! ```
//!
//! An entry is eligible when its alpha is non-zero. Its alpha is never
//! copied into the output. Ties go to the entry listed first in the
//! palette.
//!
//! Matching is by brightness alone, so hue is not preserved: a saturated
//! red and a mid grey of the same luma map to the same entry. This is what
//! gives the output its duotone look.
//!
//! # Palettes
//!
//! Five palettes are compiled in ([`builtin_palettes()`]): Orange (the
//! default), Green, Blue, Purple and Gray. [`PaletteRegistry`] starts from
//! these, accepts more at startup, and resolves unknown names to its
//! default instead of failing.
//!
//! # Parallelism
//!
//! Every output pixel depends only on its input pixel and the read-only
//! luminance table, so [`LuminanceMapper`] splits large grids into row
//! chunks on the rayon thread pool. Small grids stay on the calling thread.

pub mod api;
pub mod color;
pub mod grid;
pub mod palette;


pub use api::{map_to_palette, LumaError, LuminanceMapper};
pub use color::{luminance, Rgba};
pub use grid::{InvalidImage, PixelGrid};
pub use palette::{
    builtin_palettes, resolve_builtin, Palette, PaletteError, PaletteRegistry, ParseColorError,
    DEFAULT_PALETTE,
};
