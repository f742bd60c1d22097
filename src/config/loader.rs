//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the platform config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Target site configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site root, including the trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Post types requested from the listing pages.
    #[serde(default = "default_content_types")]
    pub content_types: Vec<String>,
}

/// Download options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads. The username folder is created inside it.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Listing pages are requested while the page number is below this bound.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Log and skip posts whose page cannot be fetched instead of aborting.
    #[serde(default)]
    pub skip_failed_posts: bool,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            content_types: default_content_types(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            max_pages: default_max_pages(),
            skip_failed_posts: false,
            show_progress: true,
        }
    }
}

fn default_base_url() -> String {
    "https://nsfw.xxx/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

fn default_content_types() -> Vec<String> {
    vec!["image".to_string(), "video".to_string(), "gallery".to_string()]
}

fn default_max_pages() -> u32 {
    100_000
}

fn default_true() -> bool {
    true
}

impl SiteConfig {
    /// Prefix every post link on the site starts with.
    pub fn post_prefix(&self) -> String {
        format!("{}post", self.base_url)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from an explicit path, the platform config
    /// directory, or fall back to defaults, in that order.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Get the effective base download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("./"))
    }
}

/// Location of the optional configuration file in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nsfwxxx-downloader")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
