use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// ZenQuotes random quote, fetched through the allorigins raw proxy.
pub const DEFAULT_QUOTE_URL: &str =
    "https://api.allorigins.win/raw?url=https%3A%2F%2Fzenquotes.io%2Fapi%2Frandom";
pub const DEFAULT_JOKE_URL: &str = "https://v2.jokeapi.dev/joke";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the content API, without a trailing `/api`.
    pub api_base_url: String,
    pub quote_url: String,
    /// JokeAPI base; the category is appended as a path segment.
    pub joke_url: String,
    pub joke_category: String,
    pub joke_safe_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            joke_url: DEFAULT_JOKE_URL.to_string(),
            joke_category: "Any".to_string(),
            joke_safe_mode: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand `$VAR` references in URLs
        for url in [
            &mut config.api_base_url,
            &mut config.quote_url,
            &mut config.joke_url,
        ] {
            if let Some(expanded) = Self::expand_vars(url) {
                *url = expanded;
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Stored configuration, or the defaults when there is no config file yet.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/sitesmith");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// API base with any trailing slashes removed.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    fn expand_vars(value: &str) -> Option<String> {
        match shellexpand::env(value) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}
