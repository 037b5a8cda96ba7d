//! Fixed color palettes for compartments and agents.

use serde::{Deserialize, Serialize};

/// RGB color used for compartment circles, agent dots and chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

pub const GREEN: Color = Color(0, 128, 0);
pub const RED: Color = Color(255, 0, 0);
pub const BLUE: Color = Color(0, 0, 255);
pub const YELLOW: Color = Color(255, 255, 0);
pub const GOLD: Color = Color(255, 215, 0);
pub const BLACK: Color = Color(0, 0, 0);

/// Palette for models with up to three compartments
pub const THREE_COLORS: &[Color] = &[GREEN, RED, BLUE];

pub const FOUR_COLORS: &[Color] = &[GREEN, Color(0xBE, 0x9C, 0x9C), RED, BLUE];

pub const FIVE_COLORS: &[Color] = &[
    GREEN,
    Color(0xBE, 0x9C, 0x9C),
    Color(0xCC, 0x5B, 0x5B),
    RED,
    BLUE,
];

pub const SIX_COLORS: &[Color] = &[
    GREEN,
    Color(0xBE, 0x9C, 0x9C),
    Color(0xCC, 0x5B, 0x5B),
    RED,
    Color(0xB0, 0x07, 0x07),
    BLUE,
];

pub const SEVEN_COLORS: &[Color] = &[
    GREEN,
    YELLOW,
    Color(0xFF, 0xE6, 0xE6),
    Color(0xFF, 0x99, 0x99),
    RED,
    Color(0x80, 0x00, 0x00),
    BLUE,
];

pub const EIGHT_COLORS: &[Color] = &[
    GREEN,
    YELLOW,
    Color(0xFF, 0xE6, 0xE6),
    Color(0xFF, 0x99, 0x99),
    RED,
    Color(0x80, 0x00, 0x00),
    BLUE,
    BLACK,
];

pub const NINE_COLORS: &[Color] = &[
    GREEN,
    YELLOW,
    Color(0xFF, 0xE6, 0xE6),
    Color(0xFF, 0x99, 0x99),
    RED,
    Color(0x80, 0x00, 0x00),
    BLUE,
    GOLD,
    BLACK,
];

/// Pick the smallest built-in palette with at least `n` entries.
///
/// Falls back to the largest palette when `n` exceeds nine; callers then get
/// cyclic color reuse via [`color_at`].
pub fn palette_for(n: usize) -> &'static [Color] {
    for palette in [
        THREE_COLORS,
        FOUR_COLORS,
        FIVE_COLORS,
        SIX_COLORS,
        SEVEN_COLORS,
        EIGHT_COLORS,
        NINE_COLORS,
    ] {
        if palette.len() >= n {
            return palette;
        }
    }
    NINE_COLORS
}

/// Color for the i-th compartment or agent class, cycling when the palette
/// has fewer entries than there are classes.
///
/// Panics on an empty palette; run-start validation rejects those.
pub fn color_at(palette: &[Color], i: usize) -> Color {
    palette[i % palette.len()]
}
