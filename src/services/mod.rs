pub mod recolor;
pub mod storage;
pub mod template_service;

pub use recolor::{recolor_image, ProcessedImage, RecolorOutput, RecolorService};
pub use storage::{output_name, sanitize_filename, Storage};
pub use template_service::{TemplateError, TemplateService};
