//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Message shown in front of the download counter.
pub const DOWNLOAD_MESSAGE: &str = "Downloading files:";

/// Create a progress bar counting processed items, rendered as
/// `{message} {pos}/{len}` and redrawn in place.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {pos}/{len} [{bar:40.cyan/blue}]")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar.set_message(message.to_string());
    bar
}

/// Plain-text form of the download counter, `Downloading files: x/y`.
pub fn download_progress_line(done: u64, total: u64) -> String {
    format!("{} {}/{}", DOWNLOAD_MESSAGE, done, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_bar_counts() {
        let bar = create_item_bar(2, DOWNLOAD_MESSAGE);
        bar.inc(1);
        bar.inc(1);

        assert_eq!(bar.position(), 2);
        assert_eq!(bar.length(), Some(2));
        assert_eq!(bar.message(), "Downloading files:");
    }

    #[test]
    fn test_download_progress_line() {
        assert_eq!(download_progress_line(1, 3), "Downloading files: 1/3");
    }
}
