//! Log-line prefixes.
//!
//! Each call reads the clock again, so two prefixes built during the same
//! invocation may carry different timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::clock::Clock;

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-18T09:00:00.000Z`.
pub fn iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `[<index>][<now>]`, used by every line of a deferred invocation.
pub fn invocation_prefix(index: u64, clock: &dyn Clock) -> String {
    format!("[{index}][{}]", iso_timestamp(clock.now()))
}

/// `[<now>]`, used by the immediate handler.
pub fn timestamp_prefix(clock: &dyn Clock) -> String {
    format!("[{}]", iso_timestamp(clock.now()))
}
