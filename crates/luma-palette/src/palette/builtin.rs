//! Built-in palette definitions.
//!
//! Five warm-to-cool five-color palettes. "Orange" is the reference set;
//! Green, Blue and Purple are channel-shifted variants of it, and Gray is a
//! plain ramp. All entries are fully opaque.

use super::palette::Palette;
use crate::color::Rgba;

/// #73121A, #D95204, #8C3503, #D9B1A3, #26201D
static ORANGE: [Rgba; 5] = [
    Rgba::opaque(115, 18, 26),
    Rgba::opaque(217, 82, 4),
    Rgba::opaque(140, 53, 3),
    Rgba::opaque(217, 177, 163),
    Rgba::opaque(38, 32, 29),
];

static GREEN: [Rgba; 5] = [
    Rgba::opaque(18, 115, 26),
    Rgba::opaque(82, 217, 4),
    Rgba::opaque(53, 140, 3),
    Rgba::opaque(177, 217, 163),
    Rgba::opaque(32, 38, 29),
];

static BLUE: [Rgba; 5] = [
    Rgba::opaque(26, 18, 115),
    Rgba::opaque(4, 82, 217),
    Rgba::opaque(3, 53, 140),
    Rgba::opaque(163, 177, 217),
    Rgba::opaque(29, 32, 38),
];

static PURPLE: [Rgba; 5] = [
    Rgba::opaque(115, 18, 85),
    Rgba::opaque(217, 82, 65),
    Rgba::opaque(140, 53, 33),
    Rgba::opaque(217, 177, 190),
    Rgba::opaque(38, 32, 45),
];

static GRAY: [Rgba; 5] = [
    Rgba::opaque(30, 30, 30),
    Rgba::opaque(85, 85, 85),
    Rgba::opaque(128, 128, 128),
    Rgba::opaque(170, 170, 170),
    Rgba::opaque(220, 220, 220),
];

/// Name of the palette used when a lookup misses.
pub const DEFAULT_PALETTE: &str = "Orange";

/// All built-in palettes in registration order. The first is the default.
static BUILTIN_PALETTES: [Palette; 5] = [
    Palette::from_static("Orange", &ORANGE),
    Palette::from_static("Green", &GREEN),
    Palette::from_static("Blue", &BLUE),
    Palette::from_static("Purple", &PURPLE),
    Palette::from_static("Gray", &GRAY),
];

/// Returns the built-in palettes in registration order.
pub fn builtin_palettes() -> &'static [Palette] {
    &BUILTIN_PALETTES
}

/// Resolve a built-in palette by exact (case-sensitive) name.
///
/// Unknown and empty names return the default palette ("Orange").
pub fn resolve_builtin(name: &str) -> &'static Palette {
    BUILTIN_PALETTES
        .iter()
        .find(|p| p.name() == name)
        .unwrap_or(&BUILTIN_PALETTES[0])
}
