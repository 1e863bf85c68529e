//! Color type and luminance weighting
//!
//! Every color in this crate is an 8-bit [`Rgba`] value. Matching only looks
//! at brightness, so the one conversion this module provides is the
//! [`luminance()`] weighted sum.
//!
//! # Example
//!
//! ```
//! use luma_palette::{luminance, Rgba};
//!
//! let white = Rgba::opaque(255, 255, 255);
//! assert!((white.luminance() - 255.0).abs() < 1e-3);
//! assert_eq!(luminance(0, 0, 0), 0.0);
//! ```

mod rgba;

pub use rgba::{luminance, Rgba, LUMA_B, LUMA_G, LUMA_R};
