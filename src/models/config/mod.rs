// Application configuration
// Loaded from config.toml; every field falls back to a default

use serde::{Deserialize, Serialize};

pub const MIN_REFRESH_INTERVAL_MS: u64 = 100;
pub const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub display: DisplayConfig,
    pub counters: CountersConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 760.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: ThemePreference,
    /// Repaint on a fixed cadence so countdowns tick without user input.
    pub live_refresh: bool,
    pub refresh_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            live_refresh: true,
            refresh_interval_ms: 1_000,
        }
    }
}

impl DisplayConfig {
    pub fn clamped_refresh_interval_ms(&self) -> u64 {
        self.refresh_interval_ms
            .clamp(MIN_REFRESH_INTERVAL_MS, MAX_REFRESH_INTERVAL_MS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountersConfig {
    /// Populate the list with the two built-in counters on start-up.
    pub seed_defaults: bool,
}

impl Default for CountersConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_interval_is_clamped() {
        let mut display = DisplayConfig::default();
        display.refresh_interval_ms = 5;
        assert_eq!(display.clamped_refresh_interval_ms(), MIN_REFRESH_INTERVAL_MS);
        display.refresh_interval_ms = 10_000_000;
        assert_eq!(display.clamped_refresh_interval_ms(), MAX_REFRESH_INTERVAL_MS);
        display.refresh_interval_ms = 250;
        assert_eq!(display.clamped_refresh_interval_ms(), 250);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [display]
            theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.theme, ThemePreference::Dark);
        assert!(config.display.live_refresh);
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.counters.seed_defaults);
    }
}
