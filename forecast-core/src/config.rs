use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::window::DEFAULT_HOURLY_LIMIT;

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Hourly window length; falls back to the dashboard default of 24.
    pub hourly_limit: Option<u32>,

    /// Payload file used by `forecast show` when no path argument is given.
    pub default_payload: Option<PathBuf>,
}

impl Config {
    /// Effective hourly window length.
    pub fn hourly_limit(&self) -> usize {
        self.hourly_limit
            .map_or(DEFAULT_HOURLY_LIMIT, |n| n as usize)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_limit_defaults_to_dashboard_window() {
        let cfg = Config::default();
        assert_eq!(cfg.hourly_limit(), DEFAULT_HOURLY_LIMIT);
    }

    #[test]
    fn hourly_limit_uses_configured_value() {
        let cfg = Config {
            hourly_limit: Some(12),
            ..Config::default()
        };
        assert_eq!(cfg.hourly_limit(), 12);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = Config {
            hourly_limit: Some(6),
            default_payload: Some(PathBuf::from("/tmp/payload.json")),
        };

        let serialized = toml::to_string_pretty(&cfg).expect("serializes");
        let parsed: Config = toml::from_str(&serialized).expect("parses back");

        assert_eq!(parsed.hourly_limit, Some(6));
        assert_eq!(parsed.default_payload, cfg.default_payload);
    }
}
