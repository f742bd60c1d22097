//! Download descriptors and the pieces their file names are built from.

/// A single file to download: where it comes from and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDescriptor {
    /// File name, `{slug}-{date}.{extension}`.
    pub name: String,

    /// Absolute URL of the media resource.
    pub src: String,
}

impl DownloadDescriptor {
    /// Build a descriptor, deriving the extension from `src`.
    pub fn new(slug: &str, date: &str, src: String) -> Self {
        let name = format!("{}-{}.{}", slug, date, file_extension(&src));
        Self { name, src }
    }
}

/// The post's path identifier: text after `post/` up to the query string.
pub fn post_slug(post_url: &str) -> Option<&str> {
    let rest = post_url.split("post/").nth(1)?;
    rest.split('?').next()
}

/// Turn "time passed" text such as `2 days ago` into `2-days-ago`.
pub fn format_date(passed: &str) -> String {
    passed.trim().replace(' ', "-")
}

/// Everything after the last `.` of the URL, or the whole URL if it has none.
pub fn file_extension(src: &str) -> &str {
    src.rsplit('.').next().unwrap_or(src)
}
