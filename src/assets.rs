//! HTML templates embedded into the binary.
//!
//! In debug builds rust-embed reads `templates/` from disk on each access,
//! so template edits show up without a rebuild. Release builds carry the
//! files inside the executable.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Names of all embedded templates, sorted.
pub fn list_templates() -> Vec<String> {
    let mut names: Vec<String> = EmbeddedTemplates::iter().map(|n| n.to_string()).collect();
    names.sort();
    names
}

/// Source text of an embedded template, or `None` if it does not exist or
/// is not valid UTF-8.
pub fn read_template(name: &str) -> Option<String> {
    let file = EmbeddedTemplates::get(name)?;
    match String::from_utf8(file.data.into_owned()) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(template = name, %e, "Embedded template is not UTF-8");
            None
        }
    }
}
