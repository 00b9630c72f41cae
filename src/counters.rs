//! Structured per-run accounting. The pipeline emits these counters and a
//! report; rendering them is the binary's job.

use std::collections::BTreeMap;

/// Reset at the start of every invocation; accumulated across all stages
/// of a single run.
#[derive(Debug, Clone, Default)]
pub struct RunCounters {
    /// Tagged spans the extractor pattern matched in the payload.
    pub spans_matched: u64,
    /// Spans that yielded a valid RawRecord.
    pub records_extracted: u64,
    /// Spans skipped for field-count or numeric-parse failures.
    pub records_skipped: u64,
    /// Records whose send timestamp was unparsable or out of range and got
    /// the wall-clock substitute.
    pub timestamp_anomalies: u64,
    /// Records written to the output file.
    pub accepted: u64,
    pub kept_by_year: BTreeMap<i32, u64>,
    pub dropped_by_year: BTreeMap<i32, u64>,
}

impl RunCounters {
    pub fn dropped_total(&self) -> u64 {
        self.dropped_by_year.values().sum()
    }
}
