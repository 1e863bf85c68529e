pub mod palettes;
pub mod recolor;
pub mod upload;

pub use palettes::{handle_palettes, PaletteInfo, PaletteListResponse, __path_handle_palettes};
pub use recolor::{handle_recolor, RecolorQuery, PALETTE_HEADER, __path_handle_recolor};
pub use upload::{handle_index, handle_upload, PageError};
