//! HTTP client for the site and its media hosts.

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use reqwest::{Client, StatusCode};

use crate::config::SiteConfig;
use crate::error::{Error, Result};

/// A response whose body is consumed chunk by chunk.
pub struct RemoteFile {
    pub status: StatusCode,
    pub body: BoxStream<'static, Result<Vec<u8>>>,
}

/// The HTTP operations the pipeline needs.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a page and return its body as text, whatever the status code.
    async fn get_text(&self, url: &str) -> Result<String>;

    /// Start fetching a file. The status is reported, not checked.
    async fn get_file(&self, url: &str) -> Result<RemoteFile>;
}

/// `reqwest`-backed fetcher. No timeouts, retries, or cookies.
pub struct SiteClient {
    client: Client,
}

impl SiteClient {
    /// Create a new client sending the configured user agent.
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&site.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for SiteClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        Ok(response.text().await?)
    }

    async fn get_file(&self, url: &str) -> Result<RemoteFile> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let body = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| Error::Download(format!("Stream error: {}", e)))
            })
            .boxed();

        Ok(RemoteFile { status, body })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory fetcher used by the pipeline tests.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use futures::stream;

    use super::*;

    /// Canned responses keyed by URL prefix; the first matching prefix wins.
    #[derive(Default)]
    pub struct FakeFetcher {
        pages: Vec<(String, String)>,
        files: HashMap<String, (StatusCode, Vec<Vec<u8>>)>,
        broken_files: Vec<String>,
        failing_pages: Vec<String>,
        pub requests: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn page(mut self, url_prefix: &str, body: &str) -> Self {
            self.pages.push((url_prefix.to_string(), body.to_string()));
            self
        }

        pub fn failing_page(mut self, url_prefix: &str) -> Self {
            self.failing_pages.push(url_prefix.to_string());
            self
        }

        pub fn file<C: AsRef<[u8]>>(mut self, url: &str, status: u16, chunks: &[C]) -> Self {
            self.files.insert(
                url.to_string(),
                (
                    StatusCode::from_u16(status).unwrap(),
                    chunks.iter().map(|c| c.as_ref().to_vec()).collect(),
                ),
            );
            self
        }

        /// A file whose body fails after the first chunk.
        pub fn broken_file(mut self, url: &str) -> Self {
            self.broken_files.push(url.to_string());
            self
        }

        pub fn request_count(&self, url_prefix: &str) -> usize {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .filter(|url| url.starts_with(url_prefix))
                .count()
        }
    }

    #[async_trait]
    impl Fetcher for FakeFetcher {
        async fn get_text(&self, url: &str) -> Result<String> {
            self.requests.lock().unwrap().push(url.to_string());

            if self.failing_pages.iter().any(|p| url.starts_with(p)) {
                return Err(Error::Scrape(format!("connection refused: {}", url)));
            }

            Ok(self
                .pages
                .iter()
                .find(|(prefix, _)| url.starts_with(prefix))
                .map(|(_, body)| body.clone())
                .unwrap_or_default())
        }

        async fn get_file(&self, url: &str) -> Result<RemoteFile> {
            self.requests.lock().unwrap().push(url.to_string());

            if self.broken_files.iter().any(|u| u == url) {
                let chunks: Vec<Result<Vec<u8>>> = vec![
                    Ok(b"partial".to_vec()),
                    Err(Error::Download("Stream error: connection reset".into())),
                ];
                return Ok(RemoteFile {
                    status: StatusCode::OK,
                    body: stream::iter(chunks).boxed(),
                });
            }

            match self.files.get(url) {
                Some((status, chunks)) => Ok(RemoteFile {
                    status: *status,
                    body: stream::iter(chunks.clone().into_iter().map(Ok)).boxed(),
                }),
                None => Err(Error::Download(format!("no route to {}", url))),
            }
        }
    }
}
