use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TOURDESK_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.tourdesk/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TOURDESK_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tourdesk").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tourdesk").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seconds between automatic dashboard refreshes.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Counter animation window in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Simulated backend latency for mutations, in milliseconds.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,

    /// Suffix appended to revenue and price displays.
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// How many tours the dashboard's "recent" strip shows.
    #[serde(default = "default_recent_tours")]
    pub recent_tours: usize,
}

fn default_refresh_interval_secs() -> u64 {
    30
}

fn default_animation_ms() -> u64 {
    1000
}

fn default_simulated_latency_ms() -> u64 {
    1000
}

fn default_currency_suffix() -> String {
    "₽".to_string()
}

fn default_recent_tours() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Config {
            refresh_interval_secs: default_refresh_interval_secs(),
            animation_ms: default_animation_ms(),
            simulated_latency_ms: default_simulated_latency_ms(),
            currency_suffix: default_currency_suffix(),
            recent_tours: default_recent_tours(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn animation_window(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.animation_ms, 1000);
        assert_eq!(config.currency_suffix, "₽");
        assert_eq!(config.recent_tours, 3);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            refresh_interval_secs: 5,
            animation_ms: 250,
            simulated_latency_ms: 0,
            currency_suffix: "EUR".to_string(),
            recent_tours: 5,
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.refresh_interval_secs, 5);
        assert_eq!(loaded.animation_ms, 250);
        assert_eq!(loaded.currency_suffix, "EUR");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.refresh_interval_secs, 30);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "refresh_interval_secs = 10\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.refresh_interval_secs, 10);
        assert_eq!(config.animation_ms, 1000);

        Ok(())
    }
}
