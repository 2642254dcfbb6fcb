//! Next-occurrence-of-weekday resolution.
//!
//! A weekday reference never means "today": when the target weekday equals
//! the current one, the result is one week out. This keeps "monday" from
//! flipping between today and next week depending on the clock.

use chrono::{DateTime, Datelike, Days, NaiveDate, Weekday};
use chrono_tz::Tz;

use super::calendar::at_clock;

/// Days from `current` to the next `target`, in `1..=7`.
pub fn days_until(current: Weekday, target: Weekday) -> u64 {
    let delta = i64::from(target.num_days_from_monday()) - i64::from(current.num_days_from_monday());
    let delta = if delta <= 0 { delta + 7 } else { delta };
    delta as u64
}

/// The first date strictly after `today` that falls on `target`.
pub fn next_occurrence_date(target: Weekday, today: NaiveDate) -> Option<NaiveDate> {
    today.checked_add_days(Days::new(days_until(today.weekday(), target)))
}

/// The next `target` weekday after `now`'s local date, at `hour:minute`.
///
/// The caller guarantees `hour < 24` and `minute < 60`; out-of-range values
/// yield `None`.
pub fn next_occurrence(target: Weekday, hour: u32, minute: u32, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let date = next_occurrence_date(target, now.date_naive())?;
    at_clock(&now.timezone(), date, hour, minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn same_weekday_rolls_a_full_week() {
        assert_eq!(days_until(Weekday::Mon, Weekday::Mon), 7);
        assert_eq!(days_until(Weekday::Sun, Weekday::Sun), 7);
    }

    #[test]
    fn earlier_weekday_wraps_into_next_week() {
        // Friday → Tuesday
        assert_eq!(days_until(Weekday::Fri, Weekday::Tue), 4);
        // Monday → Sunday
        assert_eq!(days_until(Weekday::Mon, Weekday::Sun), 6);
        // Sunday → Monday
        assert_eq!(days_until(Weekday::Sun, Weekday::Mon), 1);
    }

    #[test]
    fn next_monday_from_monday_afternoon() {
        let now = chrono_tz::Europe::Berlin.with_ymd_and_hms(2024, 6, 10, 13, 30, 0).unwrap();
        let dt = next_occurrence(Weekday::Mon, 9, 0, &now).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-17T09:00:00+02:00");
    }

    #[test]
    fn later_time_on_same_weekday_still_skips_today() {
        let now = chrono_tz::UTC.with_ymd_and_hms(2024, 6, 12, 8, 0, 0).unwrap();
        let dt = next_occurrence(Weekday::Wed, 23, 59, &now).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-19T23:59:00+00:00");
    }

    #[test]
    fn out_of_range_clock_is_none() {
        let now = chrono_tz::UTC.with_ymd_and_hms(2024, 6, 12, 8, 0, 0).unwrap();
        assert!(next_occurrence(Weekday::Thu, 24, 0, &now).is_none());
    }
}
