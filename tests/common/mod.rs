#![allow(dead_code)]

/// One `<d>` span with the given parameter block and body text.
pub fn span(params: &str, body: &str) -> String {
    format!(r#"<d p="{params}">{body}</d>"#)
}

/// A full well-formed parameter block: appear offset 61.5 s, scroll mode,
/// default font, white, the given send timestamp, and a fixed user hash.
pub fn params_with_ts(ts: &str) -> String {
    format!("61.5,1,25,16777215,{ts},0,abcdef1234567890,99")
}

/// Wrap spans in the XML envelope the platform serves.
pub fn wrap_payload(spans: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><i>{}</i>",
        spans.join("")
    )
}

/// Unix time for 2024-03-01T00:00:00Z.
pub const TS_2024_03_01: i64 = 1_709_251_200;
