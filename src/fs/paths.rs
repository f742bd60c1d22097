//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Resolve the folder a user's files are written to: `{base}/{username}`,
/// made absolute against the current directory.
pub fn get_user_folder(base_dir: &Path, username: &str) -> Result<PathBuf> {
    let base_dir = if base_dir.is_absolute() {
        base_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(base_dir)
    };

    Ok(base_dir.join(sanitize_path_component(username)?))
}

/// Ensure a directory exists, creating it and its parents if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !tokio::fs::try_exists(path).await? {
        tracing::debug!("Creating directory {}", path.display());
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}
