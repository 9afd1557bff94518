use std::fmt;

use crate::error::StyleError;

/// 8-bit RGB triple derived from a [`HexColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A validated `#RRGGBB` color code.
///
/// The original text is the source of truth and is returned unchanged by
/// [`HexColor::as_str`]; the RGB components are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// Parses a color code of the form `#RRGGBB` (hex digits in any case).
    ///
    /// `field` names the attribute being parsed and is carried in the error.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] if `value` is not exactly `#`
    /// followed by six hex digits.
    pub fn parse(value: &str, field: &'static str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor {
            field,
            value: value.to_owned(),
        };
        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let rgb = Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        };
        Ok(Self {
            text: value.to_owned(),
            rgb,
        })
    }

    /// Returns the color code exactly as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the decoded RGB components.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Returns the color as `#RRGGBB` with uppercase hex digits.
    #[must_use]
    pub fn to_canonical(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.rgb.r, self.rgb.g, self.rgb.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
