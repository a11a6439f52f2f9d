use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use trendlens_client::{DEFAULT_BASE_URL, HttpTrendsClient};
use trendlens_types::{DEFAULT_GEO, Timeframe};

pub const CONFIG_ENV: &str = "TRENDLENS_CONFIG";
pub const API_URL_ENV: &str = "TRENDLENS_API_URL";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TRENDLENS_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.trendlens/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("trendlens").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".trendlens").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Where the dashboard writes its log while it owns the terminal.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("trendlens")
        .join("dashboard.log")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_geo")]
    pub geo: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            geo: default_geo(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_geo() -> String {
    DEFAULT_GEO.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load from the resolved path, then apply `TRENDLENS_API_URL`.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(explicit_path)?;
        let config = Self::load_from(&path)?;
        Ok(config.with_base_url_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Parse the file without validating; overrides may still replace
    /// fields, so callers run [`Config::validate`] on the final value.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Replace the API base URL when an override is present and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.api.geo.trim().is_empty() {
            return Err(Error::Config("api.geo must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn client(&self) -> HttpTrendsClient {
        HttpTrendsClient::new(self.api.base_url.clone())
            .with_geo(self.api.geo.clone())
            .with_timeout(self.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.geo, "US");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.dashboard.timeframe, Timeframe::TwelveMonths);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.base_url = "https://trends.example.com".to_string();
        config.dashboard.timeframe = Timeframe::FiveYears;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[dashboard]\ntimeframe = \"today 3-m\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.dashboard.timeframe, Timeframe::ThreeMonths);
        assert_eq!(loaded.api, ApiConfig::default());

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api]\nbase_url = \"localhost:8000\"\n")?;

        let err = Config::load_from(&config_path)?.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        std::fs::write(&config_path, "[api]\ntimeout_secs = 0\n")?;
        assert!(Config::load_from(&config_path)?.validate().is_err());

        Ok(())
    }

    #[test]
    fn test_base_url_override() {
        let config =
            Config::default().with_base_url_override(Some("http://10.0.0.2:9000".to_string()));
        assert_eq!(config.api.base_url, "http://10.0.0.2:9000");

        let config = Config::default().with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_override_replaces_invalid_file_url() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api]\nbase_url = \"localhost:8000\"\n")?;

        let config = Config::load_from(&config_path)?
            .with_base_url_override(Some("http://127.0.0.1:9000".to_string()));

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        config.validate()?;
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/trendlens-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/trendlens-test.toml"));
        Ok(())
    }
}
