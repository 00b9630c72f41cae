//! Encoding resolution for the comment payload. The wire bytes arrive with
//! no declared charset, so we try a prioritized cascade of strict decodes
//! and accept the first result that also *looks* like a danmu payload.
//! The structural check, not decode success, is what selects correctness:
//! a wrong single-byte decode rarely fails, but it almost never contains
//! the marker token or an XML declaration.

use encoding_rs::{Encoding, GB18030, GBK, UTF_8};

/// Token that appears in genuine danmu payload text. Either this or an
/// XML declaration qualifies a decode as structurally plausible.
const DANMU_MARKER: &str = "弹幕";
const XML_DECL: &str = "<?xml";

/// Decoded payload text plus how it was obtained. `degraded` means no
/// candidate passed the plausibility check and the text came from a lossy
/// fallback that discarded invalid sequences.
#[derive(Debug)]
pub struct DecodedPayload {
    pub text: String,
    pub encoding: &'static str,
    pub degraded: bool,
}

/// CJK-oriented candidates first, then progressively looser ones, ending
/// in byte-preserving Latin-1 which never fails. (The WHATWG encoding
/// model folds the gb2312 label into GBK, so legacy gb2312 payloads are
/// covered by the second step.)
const STRICT_CANDIDATES: [&Encoding; 3] = [GB18030, GBK, UTF_8];

pub fn decode_payload(bytes: &[u8]) -> DecodedPayload {
    for enc in STRICT_CANDIDATES {
        let (text, had_errors) = enc.decode_without_bom_handling(bytes);
        if !had_errors && looks_plausible(&text) {
            return DecodedPayload {
                text: text.into_owned(),
                encoding: enc.name(),
                degraded: false,
            };
        }
    }

    let text = decode_latin1(bytes);
    if looks_plausible(&text) {
        return DecodedPayload {
            text,
            encoding: "latin1",
            degraded: false,
        };
    }

    // Last resort: lossy GB18030 with the replacement characters stripped,
    // so invalid sequences are discarded rather than surfacing as U+FFFD.
    // Guarantees the pipeline always has some text to parse.
    let (text, _) = GB18030.decode_without_bom_handling(bytes);
    let text: String = text.chars().filter(|&c| c != '\u{FFFD}').collect();
    DecodedPayload {
        text,
        encoding: GB18030.name(),
        degraded: true,
    }
}

fn looks_plausible(text: &str) -> bool {
    text.contains(DANMU_MARKER) || text.contains(XML_DECL)
}

/// Exact byte-to-char mapping (ISO-8859-1 semantics, all 256 byte values).
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Inverse mapping. Returns `None` if any char falls outside U+00FF, which
/// is how the mojibake round-trip detects that a repair is not applicable.
pub fn encode_latin1(text: &str) -> Option<Vec<u8>> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}
