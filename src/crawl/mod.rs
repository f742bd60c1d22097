//! Listing crawler.
//!
//! Walks a user's listing pages and collects the post links found on them.

pub mod links;
pub mod pages;

use futures::TryStreamExt;

use crate::api::Fetcher;
use crate::config::SiteConfig;
use crate::error::Result;

pub use links::extract_post_links;
pub use pages::{listing_pages, listing_url, ListingPage};

/// Collect the post URLs of every listing page of `username`.
///
/// Any fetch failure aborts the crawl.
pub async fn get_user_posts<F>(
    fetcher: &F,
    site: &SiteConfig,
    username: &str,
    max_pages: u32,
) -> Result<Vec<String>>
where
    F: Fetcher + ?Sized,
{
    let prefix = site.post_prefix();
    let mut pages = std::pin::pin!(listing_pages(fetcher, site, username, max_pages));
    let mut posts = Vec::new();

    while let Some(page) = pages.try_next().await? {
        let links = extract_post_links(&page.body, &prefix);
        tracing::debug!("Listing page {}: {} post links", page.number, links.len());
        posts.extend(links);
    }

    tracing::info!("Found {} posts for {}", posts.len(), username);
    Ok(posts)
}
