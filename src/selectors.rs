//! CSS selectors for the listing and post pages.

use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

// Listing pages
selector!(ANCHOR_SELECTOR, "a[href]");

// Post pages. Everything of interest lives inside the content section.
selector!(IMAGE_SELECTOR, ".sh-section .sh-section__image img");
selector!(VIDEO_SOURCE_SELECTOR, ".sh-section .sh-section__image video source");
selector!(PASSED_SELECTOR, ".sh-section .sh-section__passed");
