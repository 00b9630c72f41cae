//! Per-run failure kinds. Per-record anomalies (skipped spans, timestamp
//! substitutions, mojibake repair no-ops) are counters, not errors; see
//! `RunCounters`.

use thiserror::Error;

/// Errors that abort a crawl run. Every variant carries enough context to
/// tell the caller which stage failed and what was attempted.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The supplied video id does not carry the required "BV" prefix.
    /// Raised before any network call is made.
    #[error("invalid video id {0:?}: expected an identifier starting with \"BV\"")]
    InvalidIdentifier(String),

    /// The metadata endpoint could not be reached (or kept returning
    /// empty/malformed bodies) within the retry budget.
    #[error("metadata request failed after {attempts} attempts: {last_error}")]
    Transport { attempts: u32, last_error: String },

    /// The metadata endpoint answered, but its envelope carried a
    /// non-success code. Not retried; the upstream message is surfaced.
    #[error("video resolution rejected by upstream (code {code}): {message}")]
    Resolution { code: i64, message: String },

    /// The comment-listing request failed. Deliberately not retried.
    #[error("comment payload fetch failed: {0}")]
    PayloadFetch(String),

    /// Output file could not be created or written. Fatal, no partial-file
    /// recovery.
    #[error("writing output file failed: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed mid-write. Fatal.
    #[error("writing csv rows failed: {0}")]
    Csv(#[from] csv::Error),
}
