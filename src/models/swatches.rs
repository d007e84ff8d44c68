//! Built-in swatch presets plus the recent/custom color lists.

use super::color::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

/// Maximum number of entries kept by [`RecentColors`].
pub const RECENT_COLORS_CAPACITY: usize = 12;

/// The default 40-color swatch.
#[rustfmt::skip]
pub const DEFAULT_COLORS: [Color; 40] = [
    rgb(0x00, 0x00, 0x00), rgb(0xFF, 0xFF, 0xFF), rgb(0x80, 0x80, 0x80), rgb(0xC0, 0xC0, 0xC0),
    rgb(0xFF, 0x00, 0x00), rgb(0xFF, 0x6B, 0x6B), rgb(0xFF, 0x87, 0x87), rgb(0xFF, 0xA5, 0xA5),
    rgb(0xFF, 0xA5, 0x00), rgb(0xFF, 0xB8, 0x4D), rgb(0xFF, 0xC2, 0x66), rgb(0xFF, 0xD6, 0x99),
    rgb(0xFF, 0xFF, 0x00), rgb(0xFF, 0xFF, 0x66), rgb(0xFF, 0xFF, 0x99), rgb(0xFF, 0xFF, 0xCC),
    rgb(0x00, 0xFF, 0x00), rgb(0x66, 0xFF, 0x66), rgb(0x99, 0xFF, 0x99), rgb(0xCC, 0xFF, 0xCC),
    rgb(0x00, 0xFF, 0xFF), rgb(0x66, 0xFF, 0xFF), rgb(0x99, 0xFF, 0xFF), rgb(0xCC, 0xFF, 0xFF),
    rgb(0x00, 0x00, 0xFF), rgb(0x6B, 0x6B, 0xFF), rgb(0x87, 0x87, 0xFF), rgb(0xA5, 0xA5, 0xFF),
    rgb(0xFF, 0x00, 0xFF), rgb(0xFF, 0x66, 0xFF), rgb(0xFF, 0x99, 0xFF), rgb(0xFF, 0xCC, 0xFF),
    rgb(0x80, 0x00, 0x80), rgb(0xA0, 0x20, 0xF0), rgb(0x93, 0x70, 0xDB), rgb(0xDD, 0xA0, 0xDD),
    rgb(0xA5, 0x2A, 0x2A), rgb(0xCD, 0x85, 0x3F), rgb(0xD2, 0x69, 0x1E), rgb(0xF4, 0xA4, 0x60),
];

#[rustfmt::skip]
pub const PASTEL: [Color; 8] = [
    rgb(0xFF, 0xB3, 0xBA), rgb(0xFF, 0xDF, 0xBA), rgb(0xFF, 0xFF, 0xBA), rgb(0xBA, 0xFF, 0xC9),
    rgb(0xBA, 0xE1, 0xFF), rgb(0xE0, 0xBB, 0xE4), rgb(0xFF, 0xDF, 0xD3), rgb(0xFE, 0xC8, 0xD8),
];

#[rustfmt::skip]
pub const NEON: [Color; 8] = [
    rgb(0xFF, 0x00, 0x6E), rgb(0xFB, 0x56, 0x07), rgb(0xFF, 0xBE, 0x0B), rgb(0x83, 0x38, 0xEC),
    rgb(0x3A, 0x86, 0xFF), rgb(0x06, 0xFF, 0xA5), rgb(0xFF, 0x00, 0x6E), rgb(0xFF, 0xBE, 0x0B),
];

#[rustfmt::skip]
pub const EARTH: [Color; 8] = [
    rgb(0x8B, 0x45, 0x13), rgb(0xA0, 0x52, 0x2D), rgb(0xCD, 0x85, 0x3F), rgb(0xDE, 0xB8, 0x87),
    rgb(0xD2, 0x69, 0x1E), rgb(0xBC, 0x8F, 0x8F), rgb(0xF4, 0xA4, 0x60), rgb(0xDA, 0xA5, 0x20),
];

#[rustfmt::skip]
pub const OCEAN: [Color; 8] = [
    rgb(0x00, 0x69, 0x94), rgb(0x05, 0x82, 0xCA), rgb(0x00, 0xA6, 0xFB), rgb(0x00, 0x91, 0xD5),
    rgb(0x41, 0xEA, 0xD4), rgb(0xB1, 0xF8, 0xF2), rgb(0x7F, 0xCD, 0xCD), rgb(0x5A, 0xB9, 0xEA),
];

#[rustfmt::skip]
pub const SUNSET: [Color; 8] = [
    rgb(0xFF, 0x6B, 0x35), rgb(0xF7, 0x93, 0x1E), rgb(0xFD, 0xC8, 0x30), rgb(0xF3, 0x73, 0x35),
    rgb(0xFF, 0x5E, 0x5B), rgb(0xD6, 0x28, 0x28), rgb(0xF7, 0x7F, 0x00), rgb(0xFC, 0xBF, 0x49),
];

#[rustfmt::skip]
pub const FOREST: [Color; 8] = [
    rgb(0x2D, 0x6A, 0x4F), rgb(0x40, 0x91, 0x6C), rgb(0x52, 0xB7, 0x88), rgb(0x74, 0xC6, 0x9D),
    rgb(0x95, 0xD5, 0xB2), rgb(0xB7, 0xE4, 0xC7), rgb(0xD8, 0xF3, 0xDC), rgb(0x1B, 0x43, 0x32),
];

/// Named color schemes, in display order.
pub const COLOR_SCHEMES: [(&str, &[Color]); 6] = [
    ("pastel", &PASTEL),
    ("neon", &NEON),
    ("earth", &EARTH),
    ("ocean", &OCEAN),
    ("sunset", &SUNSET),
    ("forest", &FOREST),
];

/// Look up a named scheme (case-insensitive).
pub fn scheme(name: &str) -> Option<&'static [Color]> {
    COLOR_SCHEMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, colors)| *colors)
}

/// Most-recently selected colors, newest first.
///
/// Selecting a color already in the list leaves the order as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentColors {
    colors: Vec<Color>,
}

impl RecentColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, color: Color) {
        if self.colors.contains(&color) {
            return;
        }
        self.colors.insert(0, color);
        self.colors.truncate(RECENT_COLORS_CAPACITY);
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// User-defined swatches, in insertion order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomColors {
    colors: Vec<Color>,
}

impl CustomColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the color was already present.
    pub fn add(&mut self, color: Color) -> bool {
        if self.colors.contains(&color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    pub fn remove(&mut self, color: Color) {
        self.colors.retain(|c| *c != color);
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
