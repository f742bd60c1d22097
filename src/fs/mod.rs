//! Filesystem module.
//!
//! Provides:
//! - Download folder resolution and creation
//! - File and folder name sanitization

pub mod naming;
pub mod paths;

pub use naming::{sanitize_filename, sanitize_path_component};
pub use paths::{ensure_dir, get_user_folder};
