//! Configuration module for the nsfwxxx-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{default_config_path, Config, OptionsConfig, SiteConfig};
pub use validation::{validate_base_url, validate_config, validate_username};
