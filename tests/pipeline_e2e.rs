#[path = "common/mod.rs"]
mod common;

use common::*;
use danmu_etl::{filter_by_year, output_file_name, write_csv, DanmuCrawler, CSV_HEADERS};

/// The canonical three-span scenario: one valid 2024 record, one record
/// with a pre-2000 timestamp (repaired to "now", which is outside the
/// accepted set), and one span with too few fields. Exactly one row
/// survives; one anomaly and one skip are reported; the repaired record
/// never reaches the output set.
#[test]
fn three_span_scenario() {
    let payload = wrap_payload(&[
        span(&params_with_ts(&TS_2024_03_01.to_string()), "valid comment"),
        span(&params_with_ts("0"), "pre-2000 timestamp"),
        span("1.0,1,25,16777215,0", "only five fields"),
    ]);

    let crawler = DanmuCrawler::new().accepted_years([2024]);
    let outcome = crawler.process_payload(payload.as_bytes());

    assert_eq!(outcome.counters.spans_matched, 3);
    assert_eq!(outcome.counters.records_extracted, 2);
    assert_eq!(outcome.counters.records_skipped, 1);
    assert_eq!(outcome.counters.timestamp_anomalies, 1);
    assert_eq!(outcome.counters.accepted, 1);
    assert!(!outcome.degraded);

    assert_eq!(outcome.comments.len(), 1);
    let kept = &outcome.comments[0];
    assert_eq!(kept.send_year, 2024);
    assert_eq!(kept.content, "valid comment");
    assert_eq!(kept.user_id_masked, "abcdef12...");
    assert_eq!(kept.color_name, "white");
    assert_eq!(kept.mode_label, "scroll");
    assert_eq!(kept.font_label, "normal");
    assert_eq!(kept.time_position, "1:01");
    assert_eq!(kept.content_length, "valid comment".chars().count());

    // The repaired record was dropped by year, and its drop was counted.
    assert_eq!(outcome.counters.dropped_total(), 1);
    assert_eq!(
        outcome.counters.kept_by_year.get(&2024).copied(),
        Some(1)
    );
}

/// Re-filtering an already-filtered set with the same accepted years
/// changes nothing.
#[test]
fn year_filter_is_idempotent() {
    let payload = wrap_payload(&[
        span(&params_with_ts(&TS_2024_03_01.to_string()), "a"),
        span(&params_with_ts(&TS_2024_03_01.to_string()), "b"),
    ]);
    let crawler = DanmuCrawler::new().accepted_years([2024]);
    let once = crawler.process_payload(payload.as_bytes());
    assert_eq!(once.comments.len(), 2);

    let again = filter_by_year(once.comments.clone(), &[2024]);
    assert_eq!(again.kept.len(), 2);
    assert!(again.dropped_by_year.is_empty());
    for (kept, orig) in again.kept.iter().zip(once.comments.iter()) {
        assert_eq!(kept.content, orig.content);
        assert_eq!(kept.send_year, orig.send_year);
    }
}

/// Accepted rows serialize to a BOM-prefixed CSV with the fixed header and
/// one row per comment.
#[test]
fn csv_output_has_bom_header_and_rows() {
    let payload = wrap_payload(&[
        span(&params_with_ts(&TS_2024_03_01.to_string()), "第一条"),
        span(&params_with_ts(&TS_2024_03_01.to_string()), "second"),
    ]);
    let crawler = DanmuCrawler::new().accepted_years([2024]);
    let outcome = crawler.process_payload(payload.as_bytes());
    assert_eq!(outcome.comments.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(output_file_name("BV1test", outcome.comments.len()));
    write_csv(&path, &outcome.comments).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), CSV_HEADERS.join(","));
    let rows: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("第一条"));
    assert!(rows[0].contains("61.50"));
}

#[test]
fn output_file_name_encodes_id_and_count() {
    assert_eq!(output_file_name("BV1xx411c7mD", 42), "danmu_BV1xx411c7mD_42.csv");
}

/// A payload whose records all fall outside the accepted set produces an
/// empty accepted set; nothing would be written for it.
#[test]
fn all_records_outside_accepted_set() {
    // 2015-07-01T00:00:00Z: valid range, wrong year.
    let payload = wrap_payload(&[span(&params_with_ts("1435708800"), "old comment")]);
    let crawler = DanmuCrawler::new().accepted_years([2024]);
    let outcome = crawler.process_payload(payload.as_bytes());

    assert_eq!(outcome.counters.records_extracted, 1);
    assert_eq!(outcome.counters.timestamp_anomalies, 0);
    assert!(outcome.comments.is_empty());
    assert_eq!(outcome.counters.dropped_by_year.get(&2015).copied(), Some(1));
}
