//! Color resolution for fill operators.
//!
//! Design elements reference colors either as `#rrggbb` literals or by CSS
//! name. PDF `rg` operands are DeviceRGB components in the 0.0 - 1.0 range.

pub mod palette;

use crate::error::{Error, Result};

/// Fallback for references that cannot be resolved.
pub const FALLBACK_HEX: &str = "#000000";

/// An RGB color with components in the 0.0 - 1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f64,
    /// Green channel (0.0 - 1.0)
    pub g: f64,
    /// Blue channel (0.0 - 1.0)
    pub b: f64,
}

impl Color {
    /// Create a new color.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Resolves color references to [`Color`] values.
///
/// Resolution order: a `#rrggbb` literal (any case) is used directly, then a
/// palette name (any case), then black.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorResolver;

impl ColorResolver {
    /// Resolve a color reference, falling back to black.
    ///
    /// Both [`Error::InvalidColorFormat`] and [`Error::MalformedHexLiteral`]
    /// degrade to black so a bad color never blocks an export.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_pdf::color::{Color, ColorResolver};
    ///
    /// assert_eq!(ColorResolver::resolve("#ff0000"), Color::new(1.0, 0.0, 0.0));
    /// assert_eq!(ColorResolver::resolve("not-a-color"), Color::black());
    /// ```
    pub fn resolve(reference: &str) -> Color {
        match Self::try_resolve(reference) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("{}; using {}", e, FALLBACK_HEX);
                Color::black()
            },
        }
    }

    /// Resolve a color reference, reporting why it could not be resolved.
    pub fn try_resolve(reference: &str) -> Result<Color> {
        if reference.starts_with('#') {
            return Self::parse_hex(reference);
        }
        match palette::lookup(reference) {
            Some(hex) => Self::parse_hex(hex),
            None => Err(Error::InvalidColorFormat(reference.to_string())),
        }
    }

    /// Decode a `#rrggbb` literal.
    pub fn parse_hex(hex: &str) -> Result<Color> {
        let bytes = hex.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[0] == b'#'
            && bytes[1..].iter().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(Error::MalformedHexLiteral(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::MalformedHexLiteral(hex.to_string()))
        };
        Ok(Color::from_rgb8(channel(1)?, channel(3)?, channel(5)?))
    }
}
