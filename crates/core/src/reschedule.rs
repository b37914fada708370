//! Reschedule-cutoff rule shared by booking and reschedule flows.

use chrono::{DateTime, Duration, Utc};

/// Minimum lead time, in hours, before a booking's start at which
/// rescheduling is still permitted.
pub const RESCHEDULE_CUTOFF_HOURS: i64 = 24;

/// Returns true iff the booking starts more than `cutoff_hours` after
/// `now`. Total over all inputs: a past-dated start yields false, and an
/// unrepresentable cutoff can never be exceeded.
pub fn is_reschedulable(
    scheduled_start: DateTime<Utc>,
    now: DateTime<Utc>,
    cutoff_hours: i64,
) -> bool {
    match Duration::try_hours(cutoff_hours) {
        Some(cutoff) => scheduled_start.signed_duration_since(now) > cutoff,
        None => false,
    }
}
