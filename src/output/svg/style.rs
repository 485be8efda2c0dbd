//! SVG styling primitives: colors and fonts.

use std::fmt;

/// Fill or stroke color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// Direct hex color (e.g., "#58a6ff")
    Hex(String),
    /// Inherit the color of the parent element
    Inherit,
}

impl Color {
    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to an attribute value, `None` when nothing needs to be written.
    #[must_use]
    pub fn to_attr(&self) -> Option<&str> {
        match self {
            Self::Hex(h) => Some(h),
            Self::Inherit => None,
        }
    }
}

/// Font weight for text elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    SemiBold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "400"),
            Self::SemiBold => write!(f, "600"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
