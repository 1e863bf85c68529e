//! Name-to-palette registry with a fallback default.

use super::builtin::builtin_palettes;
use super::error::PaletteError;
use super::palette::Palette;

/// Ordered set of named palettes with a designated default.
///
/// Starts from the built-in palettes and can be extended before it is
/// shared (typically wrapped in an `Arc` once configuration is loaded).
/// Registration order is preserved and is the order [`names()`](Self::names)
/// reports, e.g. for a selection list.
///
/// Lookups through [`resolve()`](Self::resolve) never fail: an unknown or
/// empty name yields the default palette.
///
/// # Example
///
/// ```
/// use luma_palette::{Palette, PaletteRegistry, Rgba};
///
/// let mut registry = PaletteRegistry::builtin();
/// registry
///     .register(Palette::new("Mono", vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]))
///     .unwrap();
///
/// assert_eq!(registry.resolve("Mono").name(), "Mono");
/// assert_eq!(registry.resolve("does-not-exist").name(), "Orange");
/// ```
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: Vec<Palette>,
    default_idx: usize,
}

impl PaletteRegistry {
    /// Registry holding the built-in palettes, default "Orange".
    pub fn builtin() -> Self {
        Self {
            palettes: builtin_palettes().to_vec(),
            default_idx: 0,
        }
    }

    /// Add a palette after the existing ones.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyName`] if the name is empty or whitespace
    /// - [`PaletteError::InvalidName`] if the name contains a control
    ///   character (names are echoed in HTTP headers)
    /// - [`PaletteError::DuplicateName`] if the name is already registered
    pub fn register(&mut self, palette: Palette) -> Result<(), PaletteError> {
        if palette.name().trim().is_empty() {
            return Err(PaletteError::EmptyName);
        }
        if palette.name().chars().any(char::is_control) {
            return Err(PaletteError::InvalidName {
                name: palette.name().to_string(),
            });
        }
        if self.get(palette.name()).is_some() {
            return Err(PaletteError::DuplicateName {
                name: palette.name().to_string(),
            });
        }
        self.palettes.push(palette);
        Ok(())
    }

    /// Make a registered palette the fallback for unknown names.
    ///
    /// # Errors
    ///
    /// [`PaletteError::NotFound`] if no palette has that name.
    pub fn set_default(&mut self, name: &str) -> Result<(), PaletteError> {
        let idx = self
            .palettes
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| PaletteError::NotFound {
                name: name.to_string(),
            })?;
        self.default_idx = idx;
        Ok(())
    }

    /// Exact, case-sensitive lookup without fallback.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name() == name)
    }

    /// Lookup with fallback to the default palette.
    pub fn resolve(&self, name: &str) -> &Palette {
        self.get(name).unwrap_or_else(|| self.default_palette())
    }

    /// The palette returned for unknown names.
    pub fn default_palette(&self) -> &Palette {
        &self.palettes[self.default_idx]
    }

    /// Palette names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.palettes.iter().map(|p| p.name()).collect()
    }

    /// Iterate palettes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    /// Number of registered palettes. Never zero.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always false: a registry starts from the built-ins.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
