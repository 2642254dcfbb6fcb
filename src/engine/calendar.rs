//! Calendar-field arithmetic on zoned instants.
//!
//! Two kinds of arithmetic show up in resolution and must not be mixed:
//!
//! - **Duration addition** (`now + 2h15m`): elapsed time, done directly on the
//!   `DateTime<Tz>`. Across a DST change the wall clock moves by more or less
//!   than the added amount.
//! - **Calendar-field addition** (`tomorrow 09:00`): shift the local calendar
//!   date by whole days, then pin the wall-clock hour and minute. The result
//!   always reads 09:00 locally, whatever the DST state.
//!
//! Pinning a wall-clock time can hit a DST gap or overlap. [`localize`]
//! resolves both deterministically.

use chrono::{DateTime, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;

/// Long enough to step back over any real-world DST gap.
const GAP_LOOKBACK_HOURS: i64 = 6;

/// Attach a wall-clock time to a local date in `tz`.
///
/// - Ambiguous (fall-back overlap): the earlier instant.
/// - Nonexistent (spring-forward gap): keep the offset in force before the
///   gap, so the wall clock lands past the gap by the same distance
///   (02:30 in a 02:00→03:00 gap becomes 03:30).
pub fn localize(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let lookback = naive.checked_sub_signed(Duration::hours(GAP_LOOKBACK_HOURS))?;
            let before = tz.from_local_datetime(&lookback).earliest()?;
            let offset = Duration::seconds(i64::from(before.offset().fix().local_minus_utc()));
            let utc = naive.checked_sub_signed(offset)?;
            Some(tz.from_utc_datetime(&utc))
        }
    }
}

/// `date` at `hours:minutes:00.000` in `tz`.
pub fn at_clock(tz: &Tz, date: NaiveDate, hours: u32, minutes: u32) -> Option<DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(hours, minutes, 0)?;
    localize(tz, date.and_time(time))
}

/// `days` calendar days after `now`'s local date, at `hours:minutes`.
pub fn days_ahead_at(now: &DateTime<Tz>, days: u64, hours: u32, minutes: u32) -> Option<DateTime<Tz>> {
    let date = now.date_naive().checked_add_days(Days::new(days))?;
    at_clock(&now.timezone(), date, hours, minutes)
}

/// Today at `hours:minutes`, or tomorrow at the same wall-clock time when
/// that moment is not strictly after `now`.
pub fn next_clock_time(now: &DateTime<Tz>, hours: u32, minutes: u32) -> Option<DateTime<Tz>> {
    let today = days_ahead_at(now, 0, hours, minutes)?;
    if today > *now { Some(today) } else { days_ahead_at(now, 1, hours, minutes) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn berlin(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
        chrono_tz::Europe::Berlin.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn gap_time_moves_forward_by_gap_length() {
        // 2024-03-31 02:00 → 03:00 in Berlin.
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let dt = at_clock(&chrono_tz::Europe::Berlin, date, 2, 30).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-31T03:30:00+02:00");
    }

    #[test]
    fn overlap_time_takes_earlier_instant() {
        // 2024-10-27 03:00 → 02:00 in Berlin.
        let date = NaiveDate::from_ymd_opt(2024, 10, 27).unwrap();
        let dt = at_clock(&chrono_tz::Europe::Berlin, date, 2, 30).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-10-27T02:30:00+02:00");
    }

    #[test]
    fn days_ahead_keeps_wall_clock_across_dst() {
        let now = berlin(2024, 3, 30, 12, 0);
        let dt = days_ahead_at(&now, 1, 12, 0).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-31T12:00:00+02:00");
        assert_eq!(dt - now, Duration::hours(23));
    }

    #[test]
    fn next_clock_time_rolls_when_equal_to_now() {
        let now = berlin(2024, 6, 10, 13, 30);
        let dt = next_clock_time(&now, 13, 30).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-11T13:30:00+02:00");
    }

    #[test]
    fn seconds_are_zeroed() {
        let now = berlin(2024, 6, 10, 13, 30) + Duration::milliseconds(42_500);
        let dt = days_ahead_at(&now, 1, 8, 0).unwrap();
        assert_eq!(dt.second(), 0);
        assert_eq!(dt.nanosecond(), 0);
    }
}
