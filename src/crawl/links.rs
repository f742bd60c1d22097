//! Post link extraction from listing pages.

use scraper::Html;

use crate::selectors::ANCHOR_SELECTOR;

/// Collect every anchor target on a listing page that points at a post,
/// in document order. Duplicates are kept.
pub fn extract_post_links(body: &str, post_prefix: &str) -> Vec<String> {
    let document = Html::parse_document(body);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with(post_prefix))
        .map(str::to_string)
        .collect()
}
