// Integration tests for configuration persistence
use countdown_list::models::config::{AppConfig, ThemePreference};
use countdown_list::services::config::ConfigService;
use tempfile::tempdir;

#[test]
fn test_config_persistence() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    let service = ConfigService::new(&path);

    // First launch: nothing on disk yet
    let mut config = service.load().expect("Failed to load config");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.display.theme, ThemePreference::System);

    // Simulate the user editing their config
    config.display.theme = ThemePreference::Dark;
    config.display.refresh_interval_ms = 500;
    config.window.width = 600.0;
    service.save(&config).expect("Failed to save config");

    // Second launch reads it back
    let reloaded = ConfigService::new(&path).load_or_default();
    assert_eq!(reloaded.display.theme, ThemePreference::Dark);
    assert_eq!(reloaded.display.clamped_refresh_interval_ms(), 500);
    assert_eq!(reloaded.window.width, 600.0);
}

#[test]
fn test_hand_written_config_is_accepted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[display]\nlive_refresh = false\n\n[counters]\nseed_defaults = false\n",
    )
    .expect("Failed to write config");

    let config = ConfigService::new(&path).load().expect("Failed to parse config");
    assert!(!config.display.live_refresh);
    assert!(!config.counters.seed_defaults);
    assert_eq!(config.window, Default::default());
}
