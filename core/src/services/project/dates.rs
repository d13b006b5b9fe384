//! Date-range check for new projects

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::errors::DateRangeError;

/// Zone whose calendar decides whether an end date lies in the future
pub const REFERENCE_TIME_ZONE: Tz = chrono_tz::America::Chicago;

/// Check a project's date range against `now` in America/Chicago.
///
/// Rules, first failure wins:
/// 1. `start` must be strictly earlier than `end`
/// 2. the calendar date of `end` must not be after the calendar date of `now`
pub fn validate_project_dates(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), DateRangeError> {
    validate_project_dates_in(REFERENCE_TIME_ZONE, start, end, now)
}

/// Same as [`validate_project_dates`] with an explicit reference zone
pub fn validate_project_dates_in(
    zone: Tz,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), DateRangeError> {
    if start >= end {
        return Err(DateRangeError::StartNotBeforeEnd);
    }

    let end_day = end.with_timezone(&zone).date_naive();
    let today = now.with_timezone(&zone).date_naive();
    if end_day > today {
        return Err(DateRangeError::EndDateInFuture);
    }

    Ok(())
}
