//! Year-based business filtering, applied after repair so that anomaly
//! accounting and filtering stay independent. Idempotent: re-filtering an
//! already-filtered set with the same accepted years changes nothing.

use crate::comment::Comment;
use std::collections::BTreeMap;

pub struct FilterOutcome {
    pub kept: Vec<Comment>,
    pub kept_by_year: BTreeMap<i32, u64>,
    pub dropped_by_year: BTreeMap<i32, u64>,
}

/// Retain only comments whose send year is in `accepted_years` (assumed
/// sorted; see `CrawlOptions::with_accepted_years`). Dropped comments are
/// destroyed, never written; only their per-year counts survive.
pub fn filter_by_year(comments: Vec<Comment>, accepted_years: &[i32]) -> FilterOutcome {
    let mut kept = Vec::with_capacity(comments.len());
    let mut kept_by_year = BTreeMap::new();
    let mut dropped_by_year = BTreeMap::new();

    for comment in comments {
        if accepted_years.binary_search(&comment.send_year).is_ok() {
            *kept_by_year.entry(comment.send_year).or_insert(0) += 1;
            kept.push(comment);
        } else {
            *dropped_by_year.entry(comment.send_year).or_insert(0) += 1;
        }
    }

    FilterOutcome {
        kept,
        kept_by_year,
        dropped_by_year,
    }
}
