//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::query::PageRequest;
use crate::core::session::{Session, Theme};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding `store.url`
pub const STORE_URL_ENV: &str = "ALUMNI_STORE_URL";

/// Default environment variable holding the store API key
pub const STORE_KEY_ENV: &str = "ALUMNI_STORE_KEY";

/// Connection settings for the hosted data store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Base URL of the hosted store (e.g. "https://xyz.example.co")
    #[serde(default)]
    pub url: Option<String>,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional JSON snapshot used instead of the hosted store
    #[serde(default)]
    pub snapshot: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key_env: default_key_env(),
            timeout_secs: default_timeout_secs(),
            snapshot: None,
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// The configured URL, or `ConfigError::Missing`
    pub fn require_url(&self) -> std::result::Result<&str, ConfigError> {
        self.url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ConfigError::Missing("store.url".to_string()))
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> std::result::Result<String, ConfigError> {
        std::env::var(&self.api_key_env).map_err(|_| ConfigError::Missing(self.api_key_env.clone()))
    }
}

fn default_key_env() -> String {
    STORE_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Caps and sizes applied to listing pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListingConfig {
    /// Maximum jobs fetched for the job board
    pub jobs_limit: usize,

    /// Maximum admin log entries shown
    pub admin_logs_limit: usize,

    /// Featured jobs shown above the board
    pub featured_jobs: usize,

    /// Client-side page size
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            jobs_limit: 50,
            admin_logs_limit: 10,
            featured_jobs: 3,
            page_size: 20,
        }
    }
}

impl ListingConfig {
    /// Request for one page of a filtered listing at the configured size
    pub fn page_request(&self, page: usize) -> PageRequest {
        PageRequest::new(page, self.page_size)
    }
}

/// Auto-advance intervals of the rotating widgets, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub hero_interval_ms: u64,
    pub testimonial_interval_ms: u64,
    pub story_interval_ms: u64,
    pub this_day_interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: 5000,
            testimonial_interval_ms: 5000,
            story_interval_ms: 5000,
            this_day_interval_ms: 4000,
        }
    }
}

/// Complete portal configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub listings: ListingConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Theme applied to new sessions
    #[serde(default)]
    pub theme: Theme,

    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl PortalConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path, "Loaded portal configuration");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// A signed-out session using the configured theme
    pub fn new_session(&self) -> Session {
        Session::anonymous().with_theme(self.theme)
    }

    /// Apply `ALUMNI_STORE_URL` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(STORE_URL_ENV) {
            tracing::info!(url = %url, "Store URL overridden from environment");
            self.store.url = Some(url);
        }
        self
    }

    /// Merge several configurations; later values that differ from the
    /// defaults win
    pub fn merge(configs: Vec<PortalConfig>) -> Self {
        let defaults = Self::default_config();

        configs.into_iter().fold(defaults.clone(), |mut merged, config| {
            if config.store.url.is_some() {
                merged.store.url = config.store.url;
            }
            if config.store.snapshot.is_some() {
                merged.store.snapshot = config.store.snapshot;
            }
            if config.store.api_key_env != defaults.store.api_key_env {
                merged.store.api_key_env = config.store.api_key_env;
            }
            if config.store.timeout_secs != defaults.store.timeout_secs {
                merged.store.timeout_secs = config.store.timeout_secs;
            }
            if config.listings != defaults.listings {
                merged.listings = config.listings;
            }
            if config.carousel != defaults.carousel {
                merged.carousel = config.carousel;
            }
            if config.theme != defaults.theme {
                merged.theme = config.theme;
            }
            if config.log_level != defaults.log_level {
                merged.log_level = config.log_level;
            }
            merged
        })
    }

    /// The built-in configuration
    pub fn default_config() -> Self {
        Self {
            store: StoreConfig::default(),
            listings: ListingConfig::default(),
            carousel: CarouselConfig::default(),
            theme: Theme::Light,
            log_level: default_log_level(),
        }
    }
}
