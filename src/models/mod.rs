pub mod config;

pub use config::{AppConfig, PaletteConfig, DEFAULT_MAX_UPLOAD_BYTES};
