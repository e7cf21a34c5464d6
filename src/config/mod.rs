use crate::core::path::{config_file, ensure_dir};
use crate::core::{PostviewError, PostviewResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL the live source fetches posts from
    #[serde(default = "default_posts_url")]
    pub posts_url: String,

    /// Timeout for the whole HTTP request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_posts_url() -> String {
    "https://jsonplaceholder.typicode.com/posts".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_url: default_posts_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from platform-specific config directory, creating default if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\postview\config.yaml
    /// - Linux: ~/.config/postview/config.yaml
    /// - macOS: ~/Library/Application Support/postview/config.yaml
    pub fn load() -> PostviewResult<Self> {
        Self::load_from(&config_file()?)
    }

    /// Load config from an explicit path, creating default if it doesn't exist
    pub fn load_from(config_path: &Path) -> PostviewResult<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "writing default config");
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PostviewError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save config to platform-specific config directory
    pub fn save(&self) -> PostviewResult<()> {
        self.save_to(&config_file()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, config_path: &Path) -> PostviewResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| PostviewError::Path("Invalid config path".to_string()))?;

        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| PostviewError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, content)?;
        Ok(())
    }

    /// Set the posts URL after checking it is an absolute http(s) URL
    pub fn set_posts_url(&mut self, url: &str) -> PostviewResult<()> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| PostviewError::Config(format!("Invalid URL '{}': {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PostviewError::Config(format!(
                "Unsupported URL scheme '{}' (expected http or https)",
                parsed.scheme()
            )));
        }

        self.posts_url = url.to_string();
        Ok(())
    }

    /// Set the request timeout, in seconds
    pub fn set_request_timeout_secs(&mut self, secs: u64) -> PostviewResult<()> {
        if secs == 0 {
            return Err(PostviewError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        self.request_timeout_secs = secs;
        Ok(())
    }
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn posts_url(&self) -> &str {
        &self.posts_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
