//! Wall-clock helpers.
//!
//! Engine and orchestrator operations take a caller-supplied `now_ms` so the
//! domain logic stays deterministic under test; this module is where the
//! callers get that value.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as milliseconds since the Unix epoch.
///
/// Returns 0 if the system clock reads before the epoch.
#[must_use]
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
