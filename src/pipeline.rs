//! The crawl, extract, download pipeline for one user.

use crate::api::Fetcher;
use crate::config::Config;
use crate::crawl::get_user_posts;
use crate::download::{download_files, RunStats};
use crate::error::Result;
use crate::fs::get_user_folder;
use crate::output::{print_info, print_warning};
use crate::post::get_posts_data;

/// Download every media file posted by `username`.
///
/// Crawl and extraction errors abort the run; download errors are reported
/// per file and counted in the returned statistics.
pub async fn run_pipeline<F>(fetcher: &F, config: &Config, username: &str) -> Result<RunStats>
where
    F: Fetcher + ?Sized,
{
    let download_dir = get_user_folder(&config.download_directory(), username)?;
    let mut stats = RunStats::new(username);

    print_info(&format!("Downloading files to: {}", download_dir.display()));

    print_info("Fetching user posts...");
    let posts = get_user_posts(fetcher, &config.site, username, config.options.max_pages).await?;
    stats.posts_found = posts.len() as u64;

    if posts.is_empty() {
        print_warning(&format!("No posts found for {}", username));
    }

    print_info("Fetching posts data...");
    let descriptors = get_posts_data(fetcher, &posts, config.options.skip_failed_posts).await?;
    stats.media_found = descriptors.len() as u64;

    stats.report = download_files(
        fetcher,
        &descriptors,
        &download_dir,
        config.options.show_progress,
    )
    .await?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::testing::FakeFetcher;
    use crate::download::DownloadReport;
    use crate::output::download_progress_line;

    fn post_page(src: &str, passed: &str) -> String {
        format!(
            r#"<div class="sh-section">
                 <div class="sh-section__passed">{}</div>
                 <div class="sh-section__image"><img src="{}"></div>
               </div>"#,
            passed, src
        )
    }

    #[tokio::test]
    async fn test_downloads_all_posts_of_user() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.options.download_directory = Some(dir.path().join("downloads"));
        config.options.show_progress = false;

        let fetcher = FakeFetcher::new()
            .page(
                "https://nsfw.xxx/page/1?",
                r#"<a href="https://nsfw.xxx/post/first">1</a>
                   <a href="https://nsfw.xxx/user/alice">alice</a>
                   <a href="https://nsfw.xxx/post/second?from=user">2</a>"#,
            )
            .page("https://nsfw.xxx/page/2?", "")
            .page(
                "https://nsfw.xxx/post/first",
                &post_page("https://cdn.nsfw.xxx/i/first.jpg", "2 days ago"),
            )
            .page(
                "https://nsfw.xxx/post/second",
                &post_page("https://cdn.nsfw.xxx/i/second.png", "5 hours ago"),
            )
            .file("https://cdn.nsfw.xxx/i/first.jpg", 200, &[b"first"])
            .file("https://cdn.nsfw.xxx/i/second.png", 200, &[b"second"]);

        let stats = run_pipeline(&fetcher, &config, "alice").await.unwrap();

        assert_eq!(stats.posts_found, 2);
        assert_eq!(stats.media_found, 2);
        assert_eq!(
            stats.report,
            DownloadReport {
                total: 2,
                downloaded: 2,
                failed: 0,
            }
        );

        assert_eq!(
            download_progress_line(stats.report.processed(), stats.report.total),
            "Downloading files: 2/2"
        );

        let user_dir = dir.path().join("downloads").join("alice");
        let mut names: Vec<String> = std::fs::read_dir(&user_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["first-2-days-ago.jpg", "second-5-hours-ago.png"]);
        assert_eq!(
            std::fs::read(user_dir.join("second-5-hours-ago.png")).unwrap(),
            b"second"
        );
    }

    #[tokio::test]
    async fn test_crawl_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.options.download_directory = Some(dir.path().to_path_buf());
        config.options.show_progress = false;

        let fetcher = FakeFetcher::new().failing_page("https://nsfw.xxx/page/1?");

        assert!(run_pipeline(&fetcher, &config, "alice").await.is_err());
        assert!(!dir.path().join("alice").exists());
    }
}
