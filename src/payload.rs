//! Bulk comment-payload fetch. One attempt only: unlike the cheap metadata
//! request this pulls the full listing, and re-issuing it on failure would
//! amplify load on the upstream service.

use crate::client::HttpClient;
use crate::config::CrawlOptions;
use crate::error::CrawlError;

/// Fetch the raw comment payload for a content identifier. The body is
/// returned undecoded; its encoding is resolved downstream.
pub fn fetch_payload(
    client: &HttpClient,
    opts: &CrawlOptions,
    cid: i64,
) -> Result<Vec<u8>, CrawlError> {
    let url = format!("{}/x/v1/dm/list.so?oid={cid}", opts.api_base);
    tracing::info!(cid, url, "requesting comment payload");

    let resp = client.get(&url).map_err(CrawlError::PayloadFetch)?;
    if !(200..300).contains(&resp.status) {
        return Err(CrawlError::PayloadFetch(format!(
            "comment listing returned status {}",
            resp.status
        )));
    }
    Ok(resp.body)
}
