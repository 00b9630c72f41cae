//! Run orchestration: resolve → fetch → decode → extract → repair →
//! filter → write, strictly sequential, one video per run. The network-free
//! tail of the pipeline is exposed as `process_payload` so the record
//! stages can be exercised without a live endpoint.

use crate::client::{HttpClient, RetryPolicy};
use crate::comment::Comment;
use crate::config::CrawlOptions;
use crate::counters::RunCounters;
use crate::decode::decode_payload;
use crate::error::CrawlError;
use crate::extract::extract_records;
use crate::filter::filter_by_year;
use crate::metadata::{is_valid_bvid, resolve_video, VideoMeta};
use crate::output::{output_file_name, write_csv};
use crate::payload::fetch_payload;
use crate::repair::repair_send_time;
use crate::util::{init_tracing_once, now_local};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone)]
pub struct DanmuCrawler {
    pub(crate) opts: CrawlOptions,
}

/// Result of the record stages over one payload.
#[derive(Debug)]
pub struct PayloadOutcome {
    pub comments: Vec<Comment>,
    pub counters: RunCounters,
    pub encoding: &'static str,
    pub degraded: bool,
}

/// Everything a caller needs to render a run summary. `output_path` is
/// `None` when no comment survived extraction and filtering; in that case
/// no file is written at all.
#[derive(Debug)]
pub struct RunReport {
    pub meta: VideoMeta,
    pub encoding: &'static str,
    pub decode_degraded: bool,
    pub counters: RunCounters,
    pub output_path: Option<PathBuf>,
    pub comments: Vec<Comment>,
}

impl DanmuCrawler {
    pub fn new() -> Self {
        Self {
            opts: CrawlOptions::default(),
        }
    }

    // -------- Builder methods --------
    pub fn api_base(mut self, base: impl AsRef<str>) -> Self { self.opts = self.opts.with_api_base(base); self }
    pub fn referer(mut self, referer: impl Into<String>) -> Self { self.opts = self.opts.with_referer(referer); self }
    pub fn accepted_years<I>(mut self, years: I) -> Self where I: IntoIterator<Item = i32> { self.opts = self.opts.with_accepted_years(years); self }
    pub fn retry(mut self, retry: RetryPolicy) -> Self { self.opts = self.opts.with_retry(retry); self }
    pub fn request_timeout(mut self, timeout: Duration) -> Self { self.opts = self.opts.with_request_timeout(timeout); self }
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_output_dir(dir); self }

    /// Execute a full run for one public video identifier. Ends either with
    /// a written file plus counters, or with an error naming the stage that
    /// failed; per-record anomalies never abort the run.
    pub fn run(&self, bvid: &str) -> Result<RunReport, CrawlError> {
        init_tracing_once();

        let bvid = bvid.trim();
        if !is_valid_bvid(bvid) {
            return Err(CrawlError::InvalidIdentifier(bvid.to_string()));
        }

        let client = HttpClient::new(&self.opts.referer, self.opts.request_timeout);
        let meta = resolve_video(&client, &self.opts, bvid)?;
        tracing::info!(
            title = %meta.title,
            owner = %meta.owner,
            cid = meta.cid,
            "resolved video"
        );

        let bytes = fetch_payload(&client, &self.opts, meta.cid)?;
        tracing::info!(bytes = bytes.len(), "fetched comment payload");

        let outcome = self.process_payload(&bytes);

        if outcome.comments.is_empty() {
            tracing::warn!(
                spans = outcome.counters.spans_matched,
                dropped = outcome.counters.dropped_total(),
                "no comments survived extraction and filtering; nothing written"
            );
            return Ok(RunReport {
                meta,
                encoding: outcome.encoding,
                decode_degraded: outcome.degraded,
                counters: outcome.counters,
                output_path: None,
                comments: Vec::new(),
            });
        }

        let path = self
            .opts
            .output_dir
            .join(output_file_name(bvid, outcome.comments.len()));
        write_csv(&path, &outcome.comments)?;
        tracing::info!(path = %path.display(), rows = outcome.comments.len(), "wrote output file");

        Ok(RunReport {
            meta,
            encoding: outcome.encoding,
            decode_degraded: outcome.degraded,
            counters: outcome.counters,
            output_path: Some(path),
            comments: outcome.comments,
        })
    }

    /// Decode, extract, repair and filter one raw payload. No network, no
    /// filesystem; this is the seam the integration tests drive directly.
    pub fn process_payload(&self, bytes: &[u8]) -> PayloadOutcome {
        let decoded = decode_payload(bytes);
        if decoded.degraded {
            tracing::warn!(
                encoding = decoded.encoding,
                "no candidate encoding passed the plausibility check; decoded lossily"
            );
        } else {
            tracing::info!(encoding = decoded.encoding, "decoded comment payload");
        }

        let extracted = extract_records(&decoded.text);
        if extracted.skipped > 0 {
            tracing::warn!(skipped = extracted.skipped, "skipped malformed spans");
        }

        let now = now_local();
        let mut anomalies = 0u64;
        let comments: Vec<Comment> = extracted
            .records
            .iter()
            .map(|raw| {
                let (send_at, anomalous) = repair_send_time(&raw.send_timestamp_raw, now);
                if anomalous {
                    anomalies += 1;
                    tracing::warn!(
                        raw = %raw.send_timestamp_raw,
                        "send timestamp unparsable or out of range; substituted current time"
                    );
                }
                Comment::from_raw(raw, send_at)
            })
            .collect();

        let records_extracted = extracted.records.len() as u64;
        let filtered = filter_by_year(comments, &self.opts.accepted_years);

        let counters = RunCounters {
            spans_matched: extracted.spans_matched,
            records_extracted,
            records_skipped: extracted.skipped,
            timestamp_anomalies: anomalies,
            accepted: filtered.kept.len() as u64,
            kept_by_year: filtered.kept_by_year,
            dropped_by_year: filtered.dropped_by_year,
        };

        PayloadOutcome {
            comments: filtered.kept,
            counters,
            encoding: decoded.encoding,
            degraded: decoded.degraded,
        }
    }
}

impl Default for DanmuCrawler {
    fn default() -> Self {
        Self::new()
    }
}
