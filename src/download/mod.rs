//! Download module for content downloading.
//!
//! This module provides:
//! - Sequential media file downloading
//! - Download and run statistics

pub mod files;
pub mod state;

pub use files::download_files;
pub use state::{DownloadReport, RunStats};
