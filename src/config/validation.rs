//! Configuration validation logic.

use crate::config::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.site.base_url)?;

    if config.options.max_pages < 2 {
        return Err(Error::ConfigValidation {
            field: "max_pages".to_string(),
            message: format!(
                "Must allow at least one listing page (got {})",
                config.options.max_pages
            ),
        });
    }

    if config.site.user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    Ok(())
}

/// Validate the site base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    if !base_url.ends_with('/') {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Base URL must end with '/': {}", base_url),
        });
    }

    Ok(())
}

/// Validate a username and return it without a leading `@`.
pub fn validate_username(username: &str) -> Result<String> {
    let clean_username = username.trim().trim_start_matches('@');

    if clean_username.is_empty() {
        return Err(Error::MissingConfig("username".to_string()));
    }

    let username_pattern = Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap();
    if clean_username.contains("..") || !username_pattern.is_match(clean_username) {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' contains invalid characters. Only alphanumeric, dots, hyphens, and underscores allowed.",
                username
            ),
        });
    }

    Ok(clean_username.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert_eq!(validate_username("alice").unwrap(), "alice");
        assert_eq!(validate_username("@some_user-1").unwrap(), "some_user-1");
        assert_eq!(validate_username("  j.doe ").unwrap(), "j.doe");
    }

    #[test]
    fn test_invalid_username() {
        assert!(matches!(validate_username(""), Err(Error::MissingConfig(_))));
        assert!(validate_username("../etc").is_err());
        assert!(validate_username("a/b").is_err());
        assert!(validate_username("a b").is_err());
    }

    #[test]
    fn test_base_url() {
        assert!(validate_base_url("https://nsfw.xxx/").is_ok());
        assert!(validate_base_url("https://nsfw.xxx").is_err());
        assert!(validate_base_url("ftp://nsfw.xxx/").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn test_validate_config() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.options.max_pages = 1;
        assert!(validate_config(&config).is_err());
    }
}
