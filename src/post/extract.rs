//! Media and metadata extraction from a post page.

use scraper::{Html, Selector};
use url::Url;

use crate::error::{Error, Result};
use crate::post::descriptor::{format_date, post_slug, DownloadDescriptor};
use crate::selectors::{IMAGE_SELECTOR, PASSED_SELECTOR, VIDEO_SOURCE_SELECTOR};

/// A way of locating the media source on a post page.
type MediaStrategy = fn(&Html) -> Option<String>;

/// Tried in order; the first strategy that finds a source wins.
const MEDIA_STRATEGIES: &[(&str, MediaStrategy)] =
    &[("image", image_source), ("video", video_source)];

fn image_source(document: &Html) -> Option<String> {
    first_src(document, &IMAGE_SELECTOR)
}

fn video_source(document: &Html) -> Option<String> {
    first_src(document, &VIDEO_SOURCE_SELECTOR)
}

/// `src` of the first element matching `selector`, if present and non-empty.
fn first_src(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()?
        .value()
        .attr("src")
        .filter(|src| !src.is_empty())
        .map(str::to_string)
}

/// Locate the post's media source.
pub fn find_media_source(document: &Html) -> Option<String> {
    MEDIA_STRATEGIES.iter().find_map(|(kind, strategy)| {
        let src = strategy(document)?;
        tracing::debug!("Found {} source: {}", kind, src);
        Some(src)
    })
}

/// Text of the first "time passed" element, or an empty string.
fn passed_text(document: &Html) -> String {
    document
        .select(&PASSED_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

/// Make a media source absolute, resolving it against the post URL if needed.
fn absolute_src(post_url: &str, src: String) -> Result<String> {
    if Url::parse(&src).is_ok() {
        return Ok(src);
    }
    Ok(Url::parse(post_url)?.join(&src)?.to_string())
}

/// Parse a post page into a descriptor.
///
/// Returns `Ok(None)` when the page has no recognizable media.
pub fn parse_post(post_url: &str, body: &str) -> Result<Option<DownloadDescriptor>> {
    let document = Html::parse_document(body);

    let Some(src) = find_media_source(&document) else {
        return Ok(None);
    };

    let slug = post_slug(post_url)
        .ok_or_else(|| Error::Scrape(format!("No post slug in URL: {}", post_url)))?;
    let date = format_date(&passed_text(&document));
    // The extension comes from the src as written in the page.
    let descriptor = DownloadDescriptor::new(slug, &date, src);

    Ok(Some(DownloadDescriptor {
        src: absolute_src(post_url, descriptor.src)?,
        ..descriptor
    }))
}
