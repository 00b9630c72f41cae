//! Span extraction over the decoded payload text. The payload is treated
//! as a flat sequence of `<d p="...">body</d>` spans; malformed nesting
//! elsewhere is ignored by construction of the pattern, so no XML parser
//! is involved.

use regex::Regex;

/// One parsed wire unit before repair. Exists only if its parameter block
/// had at least eight comma-separated fields with valid numerics.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub appear_offset_secs: f64,
    pub mode: u32,
    pub font_size: u32,
    pub color: u32,
    pub send_timestamp_raw: String, // unvalidated; repaired downstream
    pub user_hash: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct ExtractOutcome {
    pub records: Vec<RawRecord>,
    pub spans_matched: u64,
    pub skipped: u64,
}

/// Walk every matching span. A span with fewer than 8 fields or with any
/// required field failing numeric parse is skipped and counted; extraction
/// always proceeds over the remaining spans.
pub fn extract_records(text: &str) -> ExtractOutcome {
    let pattern =
        Regex::new(r#"<d p="([^"]*)">([^<]*)</d>"#).expect("danmu span pattern is valid");

    let mut out = ExtractOutcome::default();
    for caps in pattern.captures_iter(text) {
        out.spans_matched += 1;
        match parse_span(&caps[1], &caps[2]) {
            Some(record) => out.records.push(record),
            None => out.skipped += 1,
        }
    }
    out
}

fn parse_span(params: &str, body: &str) -> Option<RawRecord> {
    let fields: Vec<&str> = params.split(',').collect();
    if fields.len() < 8 {
        return None;
    }
    // Fields 5 and 7+ are reserved/ignored on this wire format.
    Some(RawRecord {
        appear_offset_secs: fields[0].parse().ok()?,
        mode: fields[1].parse().ok()?,
        font_size: fields[2].parse().ok()?,
        color: fields[3].parse().ok()?,
        send_timestamp_raw: fields[4].to_string(),
        user_hash: fields[6].to_string(),
        content: body.to_string(),
    })
}
