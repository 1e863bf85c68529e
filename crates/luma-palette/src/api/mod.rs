//! Public API for the luma-palette crate.
//!
//! This module provides the high-level API: the [`LuminanceMapper`],
//! the [`map_to_palette`] shorthand, and the [`LumaError`] unified error
//! type.

mod error;
mod mapper;

pub use error::LumaError;
pub use mapper::{map_to_palette, LuminanceMapper};
