//! Blocking transport: one reusable agent per run, browser-identifying
//! headers, and a uniform randomized pre-attempt delay applied by the
//! retry policy rather than by each call site.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::sleep;
use std::time::Duration;

/// The upstream service rejects requests that do not look like they come
/// from a regular browser session on the platform's own site.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Bounded retry with a uniform randomized delay before every attempt.
/// The delay is cooperative throttling, not a correctness requirement.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay_min: Duration,
    pub delay_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_min: Duration::from_secs(1),
            delay_max: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay_min: Duration, delay_max: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay_min,
            delay_max,
        }
    }

    /// No delays at all, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO, Duration::ZERO)
    }

    /// Sleep a uniform random duration in `[delay_min, delay_max]`.
    pub fn pause(&self) {
        if self.delay_max.is_zero() {
            return;
        }
        let (lo, hi) = (self.delay_min.as_millis() as u64, self.delay_max.as_millis() as u64);
        let ms = if hi > lo {
            rand::thread_rng().gen_range(lo..=hi)
        } else {
            lo
        };
        sleep(Duration::from_millis(ms));
    }
}

/// Outcome of a single GET: status code plus the raw body bytes.
/// Bodies are returned undecoded; the payload encoding is ambiguous.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Reusable blocking HTTP session. Owned exclusively by the run; stages
/// execute in strict sequence so no locking is needed beyond the counter.
pub struct HttpClient {
    agent: ureq::Agent,
    referer: String,
    requests: AtomicU64,
}

impl HttpClient {
    pub fn new(referer: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(USER_AGENT)
            .timeout_connect(Duration::from_secs(5))
            .timeout(timeout)
            .build();
        Self {
            agent,
            referer: referer.into(),
            requests: AtomicU64::new(0),
        }
    }

    /// Number of requests issued so far (attempts count individually).
    pub fn requests_made(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Issue one GET with the configured headers. Non-2xx statuses are
    /// returned as a normal `HttpResponse`, not an error; callers decide
    /// how strict to be per stage.
    pub fn get(&self, url: &str) -> Result<HttpResponse, String> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let result = self
            .agent
            .get(url)
            .set("Referer", &self.referer)
            .set("Origin", &self.referer)
            .call();
        match result {
            Ok(resp) => Self::read_body(resp),
            // ureq surfaces non-2xx as Error::Status; normalize it back
            // into a plain response so stages can report the code.
            Err(ureq::Error::Status(_, resp)) => Self::read_body(resp),
            Err(ureq::Error::Transport(t)) => Err(t.to_string()),
        }
    }

    fn read_body(resp: ureq::Response) -> Result<HttpResponse, String> {
        use std::io::Read;
        let status = resp.status();
        let mut body = Vec::new();
        resp.into_reader()
            .read_to_end(&mut body)
            .map_err(|e| format!("reading response body: {e}"))?;
        Ok(HttpResponse { status, body })
    }
}
