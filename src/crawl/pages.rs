//! Listing page pagination.

use chrono::Utc;
use futures::stream::{self, Stream};
use url::Url;

use crate::api::Fetcher;
use crate::config::SiteConfig;
use crate::error::Result;

/// One fetched, non-empty listing page.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub number: u32,
    pub body: String,
}

/// Build the URL of a user's listing page.
///
/// The trailing `_` parameter is a cache buster.
pub fn listing_url(
    site: &SiteConfig,
    page: u32,
    username: &str,
    timestamp_ms: i64,
) -> Result<Url> {
    let mut url = Url::parse(&site.base_url)?.join(&format!("page/{}", page))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("nsfw[]", "0");
        for content_type in &site.content_types {
            query.append_pair("types[]", content_type);
        }
        query
            .append_pair("slider", "1")
            .append_pair("jsload", "1")
            .append_pair("user", username)
            .append_pair("_", &timestamp_ms.to_string());
    }

    Ok(url)
}

/// Lazily fetch listing pages starting at page 1.
///
/// The stream ends at the first page with an empty body, or once the page
/// number reaches `max_pages`. A fetch error is yielded and ends the crawl.
pub fn listing_pages<'a, F>(
    fetcher: &'a F,
    site: &'a SiteConfig,
    username: &'a str,
    max_pages: u32,
) -> impl Stream<Item = Result<ListingPage>> + 'a
where
    F: Fetcher + ?Sized,
{
    stream::try_unfold(1u32, move |page| {
        next_page(fetcher, site, username, page, max_pages)
    })
}

/// Fetch listing page `page`, returning it with the next page number, or
/// `None` once the crawl is over.
async fn next_page<F>(
    fetcher: &F,
    site: &SiteConfig,
    username: &str,
    page: u32,
    max_pages: u32,
) -> Result<Option<(ListingPage, u32)>>
where
    F: Fetcher + ?Sized,
{
    if page >= max_pages {
        tracing::warn!("Reached the listing page limit ({}), stopping", max_pages);
        return Ok(None);
    }

    let url = listing_url(site, page, username, Utc::now().timestamp_millis())?;
    let body = fetcher.get_text(url.as_str()).await?;

    if body.is_empty() {
        tracing::debug!("Listing page {} is empty, past the last page", page);
        return Ok(None);
    }

    Ok(Some((ListingPage { number: page, body }, page + 1)))
}
