//! Colours used by the countdown screen and conversion helpers between the
//! model colour type and egui's `Color32`.

use egui::Color32;

use crate::models::color::RgbaColor;
use crate::models::config::ThemePreference;

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,
    pub app_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    /// Headings, titles and the unit readouts
    pub text_primary: Color32,
    /// Descriptions, unit labels and the target date line
    pub text_secondary: Color32,
    pub unit_background: Color32,
    pub expired_background: Color32,
    pub expired_text: Color32,
}

impl ScreenTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 246, 250),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(222, 224, 230),
            text_primary: Color32::from_rgb(40, 40, 48),
            text_secondary: Color32::from_rgb(110, 112, 120),
            unit_background: Color32::from_rgb(240, 242, 247),
            expired_background: Color32::from_rgb(255, 228, 228),
            expired_text: Color32::from_rgb(180, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 25, 30),
            card_background: Color32::from_rgb(36, 38, 45),
            card_border: Color32::from_rgb(60, 62, 72),
            text_primary: Color32::from_rgb(232, 232, 238),
            text_secondary: Color32::from_rgb(160, 162, 172),
            unit_background: Color32::from_rgb(48, 50, 60),
            expired_background: Color32::from_rgb(80, 30, 30),
            expired_text: Color32::from_rgb(255, 130, 130),
        }
    }

    /// Pick light or dark, asking the OS when the preference is `System`.
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.card_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

pub fn rgba_to_color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preferences_skip_detection() {
        assert!(ScreenTheme::for_preference(ThemePreference::Dark).is_dark);
        assert!(!ScreenTheme::for_preference(ThemePreference::Light).is_dark);
    }

    #[test]
    fn rgba_conversion_keeps_channels() {
        let color = rgba_to_color32(RgbaColor::opaque(0x4E, 0xCD, 0xC4));
        assert_eq!((color.r(), color.g(), color.b(), color.a()), (0x4E, 0xCD, 0xC4, 255));
    }
}
