use crate::client::RetryPolicy;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct CrawlOptions {
    pub api_base: String,          // metadata + comment-listing endpoints live here
    pub referer: String,           // sent as both Referer and Origin
    pub accepted_years: Vec<i32>,  // normalized sorted/deduped, drives the year filter
    pub retry: RetryPolicy,        // metadata fetch only; the payload fetch is never retried
    pub request_timeout: Duration,
    pub output_dir: PathBuf,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            api_base: "https://api.bilibili.com".to_string(),
            referer: "https://www.bilibili.com".to_string(),
            accepted_years: vec![2023, 2024, 2025],
            retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs(15),
            output_dir: PathBuf::from("."),
        }
    }
}

impl CrawlOptions {
    pub fn with_api_base(mut self, base: impl AsRef<str>) -> Self {
        self.api_base = base.as_ref().trim_end_matches('/').to_string();
        self
    }
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }
    pub fn with_accepted_years<I>(mut self, years: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut v: Vec<i32> = years.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        self.accepted_years = v;
        self
    }
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}
