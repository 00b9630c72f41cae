use danmu_etl::{is_valid_bvid, CrawlError, CrawlOptions, DanmuCrawler, HttpClient, RetryPolicy};
use std::time::Duration;

#[test]
fn prefix_validation() {
    assert!(is_valid_bvid("BV1xx411c7mD"));
    assert!(!is_valid_bvid("bv1xx411c7mD"));
    assert!(!is_valid_bvid("AV170001"));
    assert!(!is_valid_bvid("BV")); // prefix alone is not an identifier
    assert!(!is_valid_bvid(""));
}

/// An invalid identifier fails before any network call: the transport
/// counter stays at zero.
#[test]
fn invalid_identifier_makes_no_network_call() {
    let opts = CrawlOptions::default()
        .with_api_base("http://127.0.0.1:9") // unroutable on purpose
        .with_retry(RetryPolicy::immediate(3))
        .with_request_timeout(Duration::from_millis(100));
    let client = HttpClient::new(&opts.referer, opts.request_timeout);

    let err = danmu_etl::resolve_video(&client, &opts, "not-a-bv-id").unwrap_err();
    assert!(matches!(err, CrawlError::InvalidIdentifier(_)));
    assert_eq!(client.requests_made(), 0);
}

/// The full run rejects a bad identifier the same way.
#[test]
fn run_rejects_invalid_identifier() {
    let err = DanmuCrawler::new()
        .api_base("http://127.0.0.1:9")
        .retry(RetryPolicy::immediate(1))
        .run("oops")
        .unwrap_err();
    assert!(matches!(err, CrawlError::InvalidIdentifier(_)));
}

/// Leading/trailing whitespace around the identifier is trimmed before
/// validation, mirroring the interactive prompt input.
#[test]
fn run_trims_identifier_before_validation() {
    let err = DanmuCrawler::new()
        .api_base("http://127.0.0.1:9")
        .retry(RetryPolicy::immediate(1))
        .run("   \n")
        .unwrap_err();
    assert!(matches!(err, CrawlError::InvalidIdentifier(ref s) if s.is_empty()));
}
