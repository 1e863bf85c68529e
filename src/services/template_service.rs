use luma_palette::PaletteRegistry;
use serde::Serialize;
use tera::{Context, Tera};

use crate::assets;
use crate::services::recolor::ProcessedImage;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const RESULT_TEMPLATE: &str = "result.html";
pub const ERROR_TEMPLATE: &str = "error.html";

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),
}

#[derive(Serialize)]
struct PaletteOption<'a> {
    name: &'a str,
    colors: Vec<String>,
}

/// Renders the HTML pages of the upload flow with Tera
pub struct TemplateService {
    tera: Tera,
}

impl TemplateService {
    /// Compile all embedded templates.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        for name in assets::list_templates() {
            let source =
                assets::read_template(&name).ok_or_else(|| TemplateError::NotFound(name.clone()))?;
            tera.add_raw_template(&name, &source)?;
        }

        for required in [INDEX_TEMPLATE, RESULT_TEMPLATE, ERROR_TEMPLATE] {
            if !tera.get_template_names().any(|n| n == required) {
                return Err(TemplateError::NotFound(required.to_string()));
            }
        }

        tracing::info!(
            templates = tera.get_template_names().count(),
            "Template service initialized"
        );

        Ok(Self { tera })
    }

    /// Render the upload form listing every registered palette.
    pub fn render_index(&self, registry: &PaletteRegistry) -> Result<String, TemplateError> {
        let palettes: Vec<PaletteOption> = registry
            .iter()
            .map(|p| PaletteOption {
                name: p.name(),
                colors: p.to_hex_strings(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("palettes", &palettes);
        context.insert("default_palette", registry.default_palette().name());

        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }

    /// Render the page showing a processed upload.
    pub fn render_result(&self, image: &ProcessedImage) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("image", image);
        context.insert("url", &format!("/processed/{}", image.filename));

        Ok(self.tera.render(RESULT_TEMPLATE, &context)?)
    }

    /// Render the page shown when a form submission fails.
    pub fn render_error(&self, status: u16, message: &str) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("status", &status);
        context.insert("message", message);

        Ok(self.tera.render(ERROR_TEMPLATE, &context)?)
    }
}
