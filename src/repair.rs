//! Heuristic record repair: timestamp substitution and mojibake reversal.
//! Repair never discards a record; year-based filtering happens later so
//! anomaly accounting stays separate from business filtering.

use crate::decode::encode_latin1;
use time::OffsetDateTime;

/// Unix time for 2000-01-01T00:00:00Z. Exclusive lower bound.
pub const TS_MIN_EXCLUSIVE: i64 = 946_684_800;
/// Upper bound, early 2030. Exclusive.
pub const TS_MAX_EXCLUSIVE: i64 = 1_900_000_000;

/// Validate and convert a raw send-timestamp string. Parse goes through
/// f64 to tolerate a fractional-second suffix. On parse failure or an
/// out-of-range value the current wall-clock time is substituted and the
/// second element of the tuple reports the anomaly.
pub fn repair_send_time(raw: &str, now: OffsetDateTime) -> (OffsetDateTime, bool) {
    let parsed = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i64);

    match parsed {
        Some(ts) if ts > TS_MIN_EXCLUSIVE && ts < TS_MAX_EXCLUSIVE => {
            match OffsetDateTime::from_unix_timestamp(ts) {
                Ok(dt) => (dt.to_offset(now.offset()), false),
                Err(_) => (now, true),
            }
        }
        _ => (now, true),
    }
}

/// Characters diagnostic of UTF-8 bytes that were mis-decoded as Latin-1.
/// The set is deliberately small; widening it risks mangling legitimate
/// text that happens to contain these characters.
const MOJIBAKE_MARKERS: [char; 4] = ['å', 'ä', 'è', 'é'];

/// Best-effort reversal of the double-encoding corruption: re-encode as
/// Latin-1 and re-decode as UTF-8. If the round-trip fails at either step
/// the original content is returned unchanged; this function never fails.
pub fn repair_mojibake(content: &str) -> String {
    if !content.chars().any(|c| MOJIBAKE_MARKERS.contains(&c)) {
        return content.to_string();
    }
    match encode_latin1(content).map(String::from_utf8) {
        Some(Ok(repaired)) => repaired,
        _ => content.to_string(),
    }
}
