//! Date/time utilities for Letterbox.
//!
//! Letters carry unix timestamps in seconds (UTC). Browsers tend to send
//! `Date.now()` values in milliseconds, so client-supplied timestamps are
//! normalized before any range check.

use chrono::Utc;

/// Timestamps numerically above this value are treated as milliseconds.
///
/// 10,000,000,000 seconds is the year 2286; no plausible delivery date in
/// seconds exceeds it, while every millisecond timestamp since 1970 does.
pub const MILLISECOND_THRESHOLD: i64 = 10_000_000_000;

/// Current unix time in seconds (UTC).
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// Normalize a client-supplied unix timestamp to seconds.
///
/// Values above [`MILLISECOND_THRESHOLD`] are assumed to be milliseconds
/// and divided by 1000, truncating toward zero.
pub fn normalize_unix_seconds(timestamp: i64) -> i64 {
    if timestamp > MILLISECOND_THRESHOLD {
        timestamp / 1000
    } else {
        timestamp
    }
}
