//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette
//! registration.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3, 6 or 8 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette construction and registration.
///
/// Lookups never produce this error: resolving an unknown name falls back
/// to the registry default. Only building or extending a registry can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Palette name is empty or whitespace
    EmptyName,
    /// Palette name contains a control character
    InvalidName {
        /// The rejected name
        name: String,
    },
    /// A palette with this name is already registered
    DuplicateName {
        /// The conflicting name
        name: String,
    },
    /// No palette with this name is registered
    NotFound {
        /// The requested name
        name: String,
    },
    /// Invalid hex color string
    ParseColor {
        /// Position of the offending color in the input list
        index: usize,
        /// Underlying parse failure
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyName => {
                write!(f, "palette name cannot be empty")
            }
            PaletteError::InvalidName { name } => {
                write!(f, "palette name {:?} contains control characters", name)
            }
            PaletteError::DuplicateName { name } => {
                write!(f, "palette '{}' is already registered", name)
            }
            PaletteError::NotFound { name } => {
                write!(f, "palette '{}' is not registered", name)
            }
            PaletteError::ParseColor { index, source } => {
                write!(f, "invalid color at index {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PaletteError::EmptyName.to_string(),
            "palette name cannot be empty"
        );
        assert_eq!(
            PaletteError::InvalidName {
                name: "Gr\ny".to_string()
            }
            .to_string(),
            "palette name \"Gr\\ny\" contains control characters"
        );
        assert_eq!(
            PaletteError::DuplicateName {
                name: "Gray".to_string()
            }
            .to_string(),
            "palette 'Gray' is already registered"
        );
        assert_eq!(
            PaletteError::NotFound {
                name: "Teal".to_string()
            }
            .to_string(),
            "palette 'Teal' is not registered"
        );
        assert_eq!(
            PaletteError::ParseColor {
                index: 2,
                source: ParseColorError::InvalidLength
            }
            .to_string(),
            "invalid color at index 2: invalid hex color length (expected 3, 6 or 8 characters)"
        );
    }

    #[test]
    fn test_parse_color_source_chain() {
        use std::error::Error;

        let err = PaletteError::ParseColor {
            index: 0,
            source: ParseColorError::InvalidLength,
        };
        assert!(err.source().is_some());
        assert!(PaletteError::EmptyName.source().is_none());
    }
}
