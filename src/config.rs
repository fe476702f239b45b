use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::constants;
use crate::api::{LogLevel, MonitoringConfig};
use crate::characters::IdBounds;
use crate::tui::ThemeVariant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_people_base_url")]
    pub people_base_url: String,
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_min_id")]
    pub min_id: u32,
    #[serde(default = "default_max_id")]
    pub max_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_true")]
    pub request_logging: bool,
    #[serde(default = "default_slow_request_ms")]
    pub slow_request_ms: u64,
}

fn default_people_base_url() -> String {
    constants::DEFAULT_PEOPLE_BASE_URL.to_string()
}

fn default_catalog_url() -> String {
    constants::DEFAULT_CATALOG_URL.to_string()
}

fn default_min_id() -> u32 {
    constants::MIN_PERSON_ID
}

fn default_max_id() -> u32 {
    constants::MAX_PERSON_ID
}

fn default_user_agent() -> String {
    constants::USER_AGENT.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("swapi-browser.log")
}

fn default_true() -> bool {
    true
}

fn default_slow_request_ms() -> u64 {
    3000
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            people_base_url: default_people_base_url(),
            catalog_url: default_catalog_url(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            min_id: default_min_id(),
            max_id: default_max_id(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            request_logging: default_true(),
            slow_request_ms: default_slow_request_ms(),
        }
    }
}

impl NavigationConfig {
    pub fn bounds(&self) -> IdBounds {
        IdBounds::new(self.min_id, self.max_id)
    }
}

impl LoggingConfig {
    pub fn monitoring(&self) -> MonitoringConfig {
        MonitoringConfig {
            request_logging: self.request_logging,
            performance_metrics: true,
            log_level: LogLevel::Debug,
            slow_request_threshold: Duration::from_millis(self.slow_request_ms),
        }
    }
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("swapi-browser")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".swapi-browser")
        };

        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Load from an explicit path, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            if path.is_some() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config = Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config: people={}, catalog={}", config.sources.people_base_url, config.sources.catalog_url);
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let nav = &self.navigation;
        if nav.min_id == 0 {
            anyhow::bail!("navigation.min_id must be at least 1");
        }
        if nav.min_id > nav.max_id {
            anyhow::bail!(
                "navigation.min_id ({}) must not exceed navigation.max_id ({})",
                nav.min_id,
                nav.max_id
            );
        }
        if self.sources.people_base_url.trim().is_empty() {
            anyhow::bail!("sources.people_base_url must not be empty");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Write this config to the given path, creating parent directories
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
                info!("Created config directory: {:?}", parent);
            }
        }

        fs::write(config_path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }
}
