//! Video resolution: public BV identifier → internal content identifier
//! plus title/owner, via the metadata endpoint. This is the only stage
//! with a retry budget: it is cheap and gates everything downstream.

use crate::client::HttpClient;
use crate::config::CrawlOptions;
use crate::error::CrawlError;
use serde::Deserialize;

/// Required prefix of every public video identifier.
const BVID_PREFIX: &str = "BV";
/// Success code in the metadata envelope.
const CODE_OK: i64 = 0;

/// Resolved video metadata.
#[derive(Debug, Clone)]
pub struct VideoMeta {
    pub bvid: String,
    pub cid: i64,
    pub title: String,
    pub owner: String,
}

#[derive(Debug, Deserialize)]
struct ViewEnvelope {
    code: i64,
    #[serde(default)]
    message: String,
    data: Option<ViewData>,
}

#[derive(Debug, Deserialize)]
struct ViewData {
    cid: i64,
    title: String,
    owner: ViewOwner,
}

#[derive(Debug, Deserialize)]
struct ViewOwner {
    name: String,
}

pub fn is_valid_bvid(bvid: &str) -> bool {
    bvid.starts_with(BVID_PREFIX) && bvid.len() > BVID_PREFIX.len()
}

/// Resolve `bvid` through the metadata endpoint. The identifier is checked
/// before any network call; transport failures, empty bodies and malformed
/// envelopes are retried up to the policy bound, each attempt preceded by
/// the policy's randomized delay. A non-success envelope code is a
/// resolution failure and is not retried.
pub fn resolve_video(
    client: &HttpClient,
    opts: &CrawlOptions,
    bvid: &str,
) -> Result<VideoMeta, CrawlError> {
    if !is_valid_bvid(bvid) {
        return Err(CrawlError::InvalidIdentifier(bvid.to_string()));
    }

    let url = format!("{}/x/web-interface/view?bvid={bvid}", opts.api_base);
    let envelope = fetch_envelope(client, opts, &url)?;

    if envelope.code != CODE_OK {
        return Err(CrawlError::Resolution {
            code: envelope.code,
            message: envelope.message,
        });
    }
    let data = envelope.data.ok_or_else(|| CrawlError::Resolution {
        code: envelope.code,
        message: "success envelope carried no data".to_string(),
    })?;

    Ok(VideoMeta {
        bvid: bvid.to_string(),
        cid: data.cid,
        title: data.title,
        owner: data.owner.name,
    })
}

fn fetch_envelope(
    client: &HttpClient,
    opts: &CrawlOptions,
    url: &str,
) -> Result<ViewEnvelope, CrawlError> {
    let attempts = opts.retry.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        opts.retry.pause();
        tracing::info!(attempt, url, "requesting video metadata");

        match client.get(url) {
            Ok(resp) if resp.status == 200 && !resp.body.is_empty() => {
                match serde_json::from_slice::<ViewEnvelope>(&resp.body) {
                    Ok(envelope) => return Ok(envelope),
                    Err(e) => {
                        last_error = format!("malformed metadata envelope: {e}");
                        tracing::warn!(attempt, error = %last_error, "metadata attempt failed");
                    }
                }
            }
            Ok(resp) => {
                last_error = if resp.body.is_empty() {
                    format!("empty metadata body (status {})", resp.status)
                } else {
                    format!("unexpected metadata status {}", resp.status)
                };
                tracing::warn!(attempt, error = %last_error, "metadata attempt failed");
            }
            Err(e) => {
                last_error = e;
                tracing::warn!(attempt, error = %last_error, "metadata attempt failed");
            }
        }
    }

    Err(CrawlError::Transport {
        attempts,
        last_error,
    })
}
