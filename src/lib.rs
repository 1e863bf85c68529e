//! Palettize
//!
//! Upload service that recolors images onto small fixed palettes by
//! luminance. The pixel mapping lives in the `luma-palette` crate; this
//! library exposes the HTTP shell for the binary and integration tests.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
