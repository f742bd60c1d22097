//! Post extractor.
//!
//! Turns post URLs into download descriptors.

pub mod descriptor;
pub mod extract;

use crate::api::Fetcher;
use crate::error::Result;

pub use descriptor::{file_extension, format_date, post_slug, DownloadDescriptor};
pub use extract::{find_media_source, parse_post};

/// Fetch every post page and build a descriptor for each one with media.
///
/// Posts without media are skipped. A failing post aborts the run unless
/// `skip_failed_posts` is set, in which case it is logged and skipped.
pub async fn get_posts_data<F>(
    fetcher: &F,
    posts: &[String],
    skip_failed_posts: bool,
) -> Result<Vec<DownloadDescriptor>>
where
    F: Fetcher + ?Sized,
{
    let mut descriptors = Vec::new();

    for post in posts {
        let parsed = fetcher
            .get_text(post)
            .await
            .and_then(|body| parse_post(post, &body));

        match parsed {
            Ok(Some(descriptor)) => descriptors.push(descriptor),
            Ok(None) => tracing::debug!("No media found in post {}", post),
            Err(e) if skip_failed_posts => {
                tracing::warn!("Skipping post {}: {}", post, e);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Found media in {} of {} posts",
        descriptors.len(),
        posts.len()
    );

    Ok(descriptors)
}
