//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{print_banner, print_config_summary, print_error, print_info, print_warning};
pub use progress::{create_item_bar, download_progress_line, DOWNLOAD_MESSAGE};
pub use stats::print_run_stats;
