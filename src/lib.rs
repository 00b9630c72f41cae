mod classify;
mod client;
mod comment;
mod config;
mod counters;
mod decode;
mod error;
mod extract;
mod filter;
mod metadata;
mod output;
mod payload;
mod pipeline;
mod repair;
mod util;

pub use crate::config::CrawlOptions;
pub use crate::error::CrawlError;
pub use crate::pipeline::{DanmuCrawler, PayloadOutcome, RunReport};

pub use crate::client::{HttpClient, HttpResponse, RetryPolicy};
pub use crate::counters::RunCounters;
pub use crate::metadata::{is_valid_bvid, resolve_video, VideoMeta};
pub use crate::payload::fetch_payload;

// Expose the record stages individually so downstream analytics (word
// clouds, sentiment scoring) can reuse pieces without a full run.
pub use crate::classify::{color_hex, color_name, font_label, mode_label, time_position, DEFAULT_FONT_SIZE};
pub use crate::comment::Comment;
pub use crate::decode::{decode_payload, DecodedPayload};
pub use crate::extract::{extract_records, ExtractOutcome, RawRecord};
pub use crate::filter::{filter_by_year, FilterOutcome};
pub use crate::output::{output_file_name, write_csv, CSV_HEADERS};
pub use crate::repair::{repair_mojibake, repair_send_time, TS_MAX_EXCLUSIVE, TS_MIN_EXCLUSIVE};

// Expose wall-clock helper so tests and binaries share the same notion of "now".
pub use crate::util::now_local;
