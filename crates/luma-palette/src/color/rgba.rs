//! 8-bit RGBA color
//!
//! Used both for image pixels and for palette entries. For a palette entry
//! the alpha channel only decides eligibility; it is never written into an
//! output pixel.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Red weight of the luma sum.
pub const LUMA_R: f32 = 0.299;
/// Green weight of the luma sum.
pub const LUMA_G: f32 = 0.587;
/// Blue weight of the luma sum.
pub const LUMA_B: f32 = 0.114;

/// Brightness of an RGB triple: `0.299*r + 0.587*g + 0.114*b`.
///
/// Result is in `0.0..=255.0` (up to float rounding). Pixels and palette
/// entries go through this same function, so a pixel that already carries a
/// palette entry's RGB has distance exactly zero to that entry.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// A color with four 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent)
    pub a: u8,
}

impl Rgba {
    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from a byte array [R, G, B, A].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns true if the alpha channel is exactly zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Luminance of the RGB channels. Alpha is ignored.
    #[inline]
    pub fn luminance(self) -> f32 {
        luminance(self.r, self.g, self.b)
    }

    /// Take the RGB channels from `source`, keep this color's alpha.
    #[inline]
    pub const fn with_rgb_of(self, source: Rgba) -> Self {
        Self::new(source.r, source.g, source.b, self.a)
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supported forms, with or without a leading `#`:
    /// - `RGB` - shorthand, expands each digit (alpha FF)
    /// - `RRGGBB` - alpha FF
    /// - `RRGGBBAA`
    ///
    /// Parsing is case-insensitive. Surrounding whitespace is trimmed.
    ///
    /// ```
    /// use luma_palette::Rgba;
    ///
    /// let c: Rgba = "#D95204".parse().unwrap();
    /// assert_eq!(c, Rgba::opaque(217, 82, 4));
    ///
    /// let hidden: Rgba = "#00000000".parse().unwrap();
    /// assert!(hidden.is_transparent());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::opaque(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::opaque(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                let a = u8::from_str_radix(&s[6..8], 16)?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
