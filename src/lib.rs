//! nsfwxxx-downloader - download every media file a user posted on nsfw.xxx
//!
//! The run is a three stage pipeline, executed sequentially:
//!
//! - [`crawl`] walks the user's listing pages and collects post links
//! - [`post`] fetches each post and turns its media into a download descriptor
//! - [`download`] streams each descriptor's file into the download folder
//!
//! # Example
//!
//! ```no_run
//! use nsfwxxx_downloader::{run_pipeline, Config, SiteClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = SiteClient::new(&config.site)?;
//!
//!     let stats = run_pipeline(&client, &config, "alice").await?;
//!     println!("{} files downloaded", stats.report.downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod pipeline;
pub mod post;
mod selectors;

// Re-exports for convenience
pub use api::{Fetcher, SiteClient};
pub use config::Config;
pub use crawl::get_user_posts;
pub use download::{download_files, DownloadReport, RunStats};
pub use error::{Error, Result};
pub use pipeline::run_pipeline;
pub use post::{get_posts_data, DownloadDescriptor};
