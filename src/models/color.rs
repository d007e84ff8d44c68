use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Token used for transparent cells in project files and on the CLI.
pub const TRANSPARENT_LITERAL: &str = "transparent";

/// A cell color: a solid RGB triple or explicitly empty.
///
/// Serialized as `"transparent"` or `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    #[default]
    Transparent,
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color {0:?}: expected \"transparent\" or #RRGGBB")]
pub struct ColorParseError(pub String);

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    pub fn is_transparent(self) -> bool {
        matches!(self, Color::Transparent)
    }

    pub fn is_opaque(self) -> bool {
        !self.is_transparent()
    }

    /// The RGB triple, or `None` for transparent.
    pub fn rgb(self) -> Option<[u8; 3]> {
        match self {
            Color::Transparent => None,
            Color::Rgb(r, g, b) => Some([r, g, b]),
        }
    }

    /// RGBA bytes as painted on export; transparent is all zero.
    pub fn to_rgba8(self) -> [u8; 4] {
        match self {
            Color::Transparent => [0, 0, 0, 0],
            Color::Rgb(r, g, b) => [r, g, b, 255],
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<Option<[u8; 3]>> for Color {
    fn from(cell: Option<[u8; 3]>) -> Self {
        cell.map(Color::from).unwrap_or(Color::Transparent)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => f.write_str(TRANSPARENT_LITERAL),
            Color::Rgb(r, g, b) => write!(f, "#{}", hex::encode_upper([*r, *g, *b])),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(TRANSPARENT_LITERAL) {
            return Ok(Color::Transparent);
        }

        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb).map_err(|_| ColorParseError(s.to_string()))?;
        Ok(rgb.into())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
