//! Download bookkeeping.

/// Outcome counts of one download batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub total: u64,
    pub downloaded: u64,
    pub failed: u64,
}

impl DownloadReport {
    /// Create an empty report for a batch of `total` files.
    pub fn new(total: usize) -> Self {
        Self {
            total: total as u64,
            ..Default::default()
        }
    }

    pub fn record_success(&mut self) {
        self.downloaded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Number of files attempted so far.
    pub fn processed(&self) -> u64 {
        self.downloaded + self.failed
    }
}

/// Statistics for a whole run.
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub username: String,
    pub posts_found: u64,
    pub media_found: u64,
    pub report: DownloadReport,
}

impl RunStats {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            ..Default::default()
        }
    }

    /// Posts that had no recognizable media (or were skipped after a failure).
    pub fn posts_without_media(&self) -> u64 {
        self.posts_found.saturating_sub(self.media_found)
    }
}
