//! Palette types and the palette registry
//!
//! This module provides the [`Palette`] type, the compiled-in built-in
//! palettes, and [`PaletteRegistry`] for name lookup with a fallback default.

mod builtin;
mod error;
mod palette;
mod registry;

pub use builtin::{builtin_palettes, resolve_builtin, DEFAULT_PALETTE};
pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
pub use registry::PaletteRegistry;
