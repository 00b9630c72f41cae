#[path = "common/mod.rs"]
mod common;

use common::*;
use danmu_etl::decode_payload;

/// A GB18030-encoded payload carrying the marker token is accepted by the
/// first strict candidate.
#[test]
fn gb18030_payload_accepted_via_marker() {
    let text = format!(
        "<i>{}</i>弹幕",
        span(&params_with_ts("1709251200"), "中文弹幕内容")
    );
    let (bytes, _, had_errors) = encoding_rs::GB18030.encode(&text);
    assert!(!had_errors);

    let decoded = decode_payload(&bytes);
    assert!(!decoded.degraded);
    assert_eq!(decoded.encoding, encoding_rs::GB18030.name());
    assert!(decoded.text.contains("中文弹幕内容"));
}

/// An ASCII XML payload passes the structural check on the first candidate
/// that strictly decodes it (every candidate is ASCII-compatible).
#[test]
fn ascii_xml_payload_is_plausible() {
    let payload = wrap_payload(&[span(&params_with_ts("1709251200"), "hello")]);
    let decoded = decode_payload(payload.as_bytes());
    assert!(!decoded.degraded);
    assert!(decoded.text.contains("<?xml"));
    assert!(decoded.text.contains("hello"));
}

/// Bytes no CJK/UTF-8 candidate can decode strictly still reach Latin-1,
/// which never fails; the XML declaration keeps the result plausible.
#[test]
fn undecodable_byte_falls_through_to_latin1() {
    let mut bytes = wrap_payload(&[span(&params_with_ts("1709251200"), "ok")]).into_bytes();
    bytes.push(0xFF); // invalid lead byte for GB18030/GBK, invalid UTF-8
    let decoded = decode_payload(&bytes);
    assert!(!decoded.degraded);
    assert_eq!(decoded.encoding, "latin1");
    assert!(decoded.text.contains("<?xml"));
}

/// Garbage with no structural marker degrades to the lossy fallback and is
/// flagged, never an error; the pipeline always gets some text. Invalid
/// sequences are discarded outright, so no replacement character survives.
#[test]
fn implausible_garbage_degrades_lossily() {
    let bytes = [0xFFu8, 0xFE, 0x00, 0x81, 0x30];
    let decoded = decode_payload(&bytes);
    assert!(decoded.degraded);
    assert_eq!(decoded.encoding, encoding_rs::GB18030.name());
    assert!(!decoded.text.contains('\u{FFFD}'));
}

/// Empty input degrades quietly rather than erroring.
#[test]
fn empty_input_degrades() {
    let decoded = decode_payload(b"");
    assert!(decoded.degraded);
    assert!(decoded.text.is_empty());
}
