use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Reads and writes the TOML configuration file.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service pointing at the per-user config directory.
    pub fn from_project_dirs() -> Self {
        Self::new(resolve_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the config file. A missing file yields the defaults.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", self.path.display()))?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but logs and falls back to defaults on error.
    pub fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => {
                log::info!("Loaded configuration from {}", self.path.display());
                config
            }
            Err(err) => {
                log::warn!("Using default configuration: {err:#}");
                AppConfig::default()
            }
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }
}

fn resolve_config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "CountdownList", "CountdownList") {
        dirs.config_dir().join(CONFIG_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for config");
        PathBuf::from(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::ThemePreference;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let service = ConfigService::new(dir.path().join("absent.toml"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let service = ConfigService::new(dir.path().join("nested").join(CONFIG_FILE_NAME));
        let mut config = AppConfig::default();
        config.display.theme = ThemePreference::Light;
        config.display.live_refresh = false;
        config.counters.seed_defaults = false;

        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[display\ntheme = ").unwrap();
        let service = ConfigService::new(&path);

        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), AppConfig::default());
    }
}
