/// Fixed accent palette for countdown cards.
///
/// A colour is drawn once when a counter is created and never changes
/// afterwards; edits only touch the text and date fields.
use rand::Rng;

use crate::models::color::RgbaColor;

pub const PALETTE: [RgbaColor; 7] = [
    RgbaColor::opaque(0xFF, 0x6B, 0x6B), // coral
    RgbaColor::opaque(0x4E, 0xCD, 0xC4), // teal
    RgbaColor::opaque(0x45, 0xB7, 0xD1), // sky
    RgbaColor::opaque(0xFF, 0xA0, 0x7A), // salmon
    RgbaColor::opaque(0x98, 0xD8, 0xC8), // mint
    RgbaColor::opaque(0xF7, 0xDC, 0x6F), // sand
    RgbaColor::opaque(0xBB, 0x8F, 0xCE), // lavender
];

/// Pick a palette colour uniformly at random.
pub fn assign_color<R: Rng + ?Sized>(rng: &mut R) -> RgbaColor {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

pub fn is_palette_color(color: RgbaColor) -> bool {
    PALETTE.contains(&color)
}

/// Two-stop gradient used for a card header: lighter on top, base below.
pub fn header_gradient(base: RgbaColor) -> (RgbaColor, RgbaColor) {
    (base.lighten(0.25), base.darken(0.08))
}
