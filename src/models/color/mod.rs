// Accent colour model shared by the palette and card rendering

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Hex form without alpha, e.g. `#FF6B6B`.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Blend towards white by `factor` (0.0 keeps the colour, 1.0 is white).
    pub fn lighten(self, factor: f32) -> Self {
        self.mix(RgbaColor::new(255, 255, 255, self.a), factor)
    }

    /// Blend towards black by `factor`.
    pub fn darken(self, factor: f32) -> Self {
        self.mix(RgbaColor::new(0, 0, 0, self.a), factor)
    }

    fn mix(self, target: RgbaColor, factor: f32) -> Self {
        let weight = factor.clamp(0.0, 1.0);
        let mix = |start: u8, end: u8| -> u8 {
            let start_f = start as f32;
            let end_f = end as f32;
            ((start_f + (end_f - start_f) * weight).round()).clamp(0.0, 255.0) as u8
        };
        RgbaColor::new(
            mix(self.r, target.r),
            mix(self.g, target.g),
            mix(self.b, target.b),
            self.a,
        )
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    pub fn relative_luminance(&self) -> f32 {
        fn srgb_component(value: u8) -> f32 {
            let channel = value as f32 / 255.0;
            if channel <= 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * srgb_component(self.r)
            + 0.7152 * srgb_component(self.g)
            + 0.0722 * srgb_component(self.b)
    }

    /// Text colour that stays readable on top of `self`.
    pub fn readable_text_color(&self) -> Self {
        const LIGHT: RgbaColor = RgbaColor::opaque(255, 255, 255);
        const DARK: RgbaColor = RgbaColor::opaque(20, 28, 45);
        if self.relative_luminance() > 0.5 {
            DARK
        } else {
            LIGHT
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}
