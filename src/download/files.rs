//! Media file downloading.

use std::io::Write;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::StatusCode;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::Fetcher;
use crate::download::state::DownloadReport;
use crate::error::Result;
use crate::fs::{ensure_dir, sanitize_filename};
use crate::output::{create_item_bar, download_progress_line, print_error, DOWNLOAD_MESSAGE};
use crate::post::DownloadDescriptor;

/// Result of a single download attempt that did not error.
enum Outcome {
    Saved(PathBuf),
    Rejected(StatusCode),
}

/// Download every descriptor into `target_dir`, one at a time.
///
/// The directory is created first; failing to create it is the only fatal
/// error. Each file that cannot be downloaded is reported and skipped.
pub async fn download_files<F>(
    fetcher: &F,
    descriptors: &[DownloadDescriptor],
    target_dir: &Path,
    show_progress: bool,
) -> Result<DownloadReport>
where
    F: Fetcher + ?Sized,
{
    ensure_dir(target_dir).await?;

    let mut report = DownloadReport::new(descriptors.len());
    let progress = if show_progress {
        create_item_bar(descriptors.len() as u64, DOWNLOAD_MESSAGE)
    } else {
        ProgressBar::hidden()
    };

    // indicatif draws nothing when stderr is not a terminal.
    let plain_progress = show_progress && progress.is_hidden();

    for descriptor in descriptors {
        match download_file(fetcher, descriptor, target_dir).await {
            Ok(Outcome::Saved(path)) => {
                tracing::debug!("Downloaded: {}", path.display());
                report.record_success();
            }
            Ok(Outcome::Rejected(status)) => {
                progress.suspend(|| {
                    print_error(&format!("Failed to download {}: {}", descriptor.name, status))
                });
                report.record_failure();
            }
            Err(e) => {
                progress.suspend(|| {
                    print_error(&format!("Error downloading {}: {}", descriptor.name, e))
                });
                report.record_failure();
            }
        }

        progress.inc(1);

        if plain_progress {
            print!("\r{}", download_progress_line(report.processed(), report.total));
            std::io::stdout().flush()?;
        }
    }

    progress.finish();
    if plain_progress {
        println!();
    }

    Ok(report)
}

/// Stream one remote file to `{target_dir}/{name}`, overwriting it.
async fn download_file<F>(
    fetcher: &F,
    descriptor: &DownloadDescriptor,
    target_dir: &Path,
) -> Result<Outcome>
where
    F: Fetcher + ?Sized,
{
    let response = fetcher.get_file(&descriptor.src).await?;

    if !response.status.is_success() {
        return Ok(Outcome::Rejected(response.status));
    }

    let output_path = target_dir.join(sanitize_filename(&descriptor.name)?);

    let mut file = File::create(&output_path).await?;
    let mut body = response.body;

    while let Some(chunk) = body.next().await {
        file.write_all(&chunk?).await?;
    }

    file.flush().await?;

    Ok(Outcome::Saved(output_path))
}
