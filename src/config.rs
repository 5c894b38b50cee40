use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::theme::ThemeConfig;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// How long the event loop waits for input before redrawing.
    pub tick_rate_ms: u64,
    /// Delay before the "Reminder Added!" screen returns on its own.
    pub confirm_delay_ms: u64,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            confirm_delay_ms: 1500,
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the user config dir, falling back to defaults
    /// when it is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("study-buddy").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.confirm_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r##"
            confirm_delay_ms = 500

            [theme]
            preset = "gruvbox"
            urgent = "#cc0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.confirm_delay_ms, 500);
        assert_eq!(config.theme.preset.as_deref(), Some("gruvbox"));
        assert_eq!(config.theme.urgent.as_deref(), Some("#cc0000"));
    }

    #[test]
    fn tick_rate_has_a_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("study-buddy-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(Config::from_file(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
