//! Per-minute API token.
//!
//! The backend and its clients share one secret. A token is the first 16
//! hex characters of `SHA-256(secret ‖ YYYYMMDDHHmm)` over the current UTC
//! minute, so it is stable for one minute and both sides can compute it
//! independently.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

/// Request header carrying the token.
pub const TOKEN_HEADER: &str = "X-API-Token";

/// Length of a token in hex characters.
pub const TOKEN_LEN: usize = 16;

/// Minutes of clock skew the backend tolerates behind the current minute.
pub const DEFAULT_ACCEPT_WINDOW: u32 = 5;

/// Minute-granularity UTC stamp, `YYYYMMDDHHmm`.
pub fn minute_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d%H%M").to_string()
}

/// Token for `secret` during the UTC minute containing `at`.
pub fn token_at(secret: &str, at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(minute_stamp(at).as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(TOKEN_LEN);
    digest
}

/// Check a presented token against the current minute and the
/// `window_minutes` minutes before it.
pub fn verify_token(secret: &str, token: &str, now: DateTime<Utc>, window_minutes: u32) -> bool {
    if token.len() != TOKEN_LEN {
        return false;
    }
    (0..=i64::from(window_minutes))
        .any(|offset| token_at(secret, now - Duration::minutes(offset)) == token)
}
