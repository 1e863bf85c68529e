//! Named, ordered palette of RGBA entries.

use std::borrow::Cow;

use super::error::PaletteError;
use crate::color::Rgba;

/// A named, ordered list of recoloring targets.
///
/// Entry order is fixed at construction and is the tie-break order used by
/// the mapper: when two entries are equally close in brightness, the one
/// listed first wins.
///
/// An entry whose alpha is zero is kept in the list but is never a match
/// candidate. A palette may be empty, or contain only such entries; mapping
/// against it leaves every pixel untouched.
///
/// Built-in palettes borrow `'static` data, so they can live in a `static`
/// table and be cloned for free. Palettes loaded at runtime own their data.
///
/// # Example
///
/// ```
/// use luma_palette::{Palette, Rgba};
///
/// let palette = Palette::from_hex("Duo", &["#101010", "#F0F0F0"]).unwrap();
/// assert_eq!(palette.name(), "Duo");
/// assert_eq!(palette.entries()[1], Rgba::opaque(240, 240, 240));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: Cow<'static, str>,
    entries: Cow<'static, [Rgba]>,
}

impl Palette {
    /// Create a palette from owned data.
    pub fn new(name: impl Into<String>, entries: Vec<Rgba>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            entries: Cow::Owned(entries),
        }
    }

    /// Create a palette over `'static` data without allocating.
    ///
    /// Usable in `static` initializers.
    pub const fn from_static(name: &'static str, entries: &'static [Rgba]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            entries: Cow::Borrowed(entries),
        }
    }

    /// Create a palette from hex color strings (`#RGB`, `#RRGGBB` or
    /// `#RRGGBBAA`).
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] with the position of the first
    /// string that fails to parse.
    pub fn from_hex<S: AsRef<str>>(
        name: impl Into<String>,
        colors: &[S],
    ) -> Result<Self, PaletteError> {
        let entries = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.as_ref()
                    .parse::<Rgba>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, entries))
    }

    /// Palette name as registered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in definition order, including ineligible ones.
    #[inline]
    pub fn entries(&self) -> &[Rgba] {
        &self.entries
    }

    /// Number of entries, including ineligible ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that can be matched (alpha != 0), paired with their index in
    /// [`entries()`](Self::entries).
    pub fn eligible(&self) -> impl Iterator<Item = (usize, Rgba)> + '_ {
        self.entries
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, c)| !c.is_transparent())
    }

    /// Returns true if at least one entry can be matched.
    pub fn has_eligible(&self) -> bool {
        self.eligible().next().is_some()
    }

    /// Entries formatted as `#RRGGBBAA` strings.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.entries.iter().map(|c| c.to_hex()).collect()
    }
}
