use luma_palette::{Palette, PaletteRegistry};
use serde::Deserialize;
use std::path::Path;

/// Default request body ceiling: 20 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application configuration loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Palette used when a request names none, or an unknown one
    #[serde(default)]
    pub default_palette: Option<String>,

    /// Largest accepted request body, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Extra palettes registered after the built-ins
    #[serde(default)]
    pub palettes: Vec<PaletteConfig>,
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

/// A user-defined palette: a name and a list of hex colors
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    pub name: String,

    /// `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    #[serde(default)]
    pub colors: Vec<String>,
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// Read and parse failures are logged and fall back to defaults so a
    /// broken config never keeps the server from starting.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        palettes = config.palettes.len(),
                        default_palette = ?config.default_palette,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Build the palette registry: built-ins first, then configured palettes
    /// in file order. Invalid palettes are skipped with a warning.
    pub fn build_registry(&self) -> PaletteRegistry {
        let mut registry = PaletteRegistry::builtin();

        for entry in &self.palettes {
            let palette = match Palette::from_hex(entry.name.clone(), &entry.colors) {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(palette = %entry.name, %e, "Skipping invalid palette");
                    continue;
                }
            };

            if !palette.has_eligible() {
                tracing::warn!(
                    palette = %entry.name,
                    "Palette has no opaque entries; images mapped with it pass through unchanged"
                );
            }

            match registry.register(palette) {
                Ok(()) => {
                    tracing::debug!(palette = %entry.name, colors = entry.colors.len(), "Registered palette")
                }
                Err(e) => tracing::warn!(palette = %entry.name, %e, "Skipping palette"),
            }
        }

        if let Some(ref name) = self.default_palette {
            if let Err(e) = registry.set_default(name) {
                tracing::warn!(
                    %e,
                    fallback = %registry.default_palette().name(),
                    "Configured default palette not registered"
                );
            }
        }

        registry
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_palette: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            palettes: Vec::new(),
        }
    }
}
