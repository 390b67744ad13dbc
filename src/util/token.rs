//! Bearer-token expiry inspection.
//!
//! DESIGN
//! ======
//! Tokens are opaque everywhere else in the crate; the single exception is
//! the `exp` claim in the payload segment, read locally so an already-dead
//! token never triggers a network round-trip. Decode failure is a typed
//! "could not determine expiry" (`None`), which callers treat as expired.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decode the embedded expiry (unix seconds) from a three-segment
/// dot-separated token. Only the middle (payload) segment is inspected.
///
/// Returns `None` when the token is not three segments, the payload is not
/// base64url, the payload is not JSON, or the `exp` claim is missing or not
/// an integer.
#[must_use]
pub fn decode_expiry(token: &str) -> Option<i64> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// Whether a token is expired at `now` (unix seconds).
///
/// Conservative: a token whose expiry cannot be determined counts as expired.
#[must_use]
pub fn is_expired(token: &str, now: i64) -> bool {
    decode_expiry(token).map_or(true, |exp| exp <= now)
}
