//! Property tests for the matcher and resolver.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use proptest::prelude::*;

use super::resolve::resolve_pattern;
use super::weekday::next_occurrence;
use super::Matcher;
use crate::error::ResolveError;
use crate::time_pattern::{Sign, TimePattern};

const ZONES: &[Tz] = &[
    chrono_tz::UTC,
    chrono_tz::Europe::Berlin,
    chrono_tz::America::New_York,
    chrono_tz::Asia::Kolkata,
    chrono_tz::Australia::Lord_Howe,
];

/// Any instant in 2020..2030, seconds included, in one of `ZONES`.
fn any_now() -> impl Strategy<Value = DateTime<Tz>> {
    (0i64..(10 * 365 * 86_400), 0..ZONES.len()).prop_map(|(secs, zone)| {
        let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        (base + Duration::seconds(secs)).with_timezone(&ZONES[zone])
    })
}

/// Like `any_now`, but only in zones without DST, so wall-clock arithmetic is exact.
fn fixed_offset_now() -> impl Strategy<Value = DateTime<Tz>> {
    (0i64..(10 * 365 * 86_400), prop::bool::ANY).prop_map(|(secs, kolkata)| {
        let tz = if kolkata { chrono_tz::Asia::Kolkata } else { chrono_tz::UTC };
        (Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)).with_timezone(&tz)
    })
}

const WEEKDAYS: [Weekday; 7] =
    [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun];

fn any_weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(WEEKDAYS.to_vec())
}

proptest! {
    #[test]
    fn positive_offset_is_exact_elapsed_minutes(now in any_now(), hours in 0u32..24, minutes in 0u32..60) {
        let p = TimePattern::RelativeOffset { sign: Sign::Plus, hours, minutes };
        let resolved = resolve_pattern(&p, &now).unwrap();
        prop_assert_eq!(resolved - now, Duration::minutes(i64::from(hours * 60 + minutes)));
    }

    #[test]
    fn negative_offset_is_always_past_time(now in any_now(), hours in 0u32..24, minutes in 0u32..60) {
        let p = TimePattern::RelativeOffset { sign: Sign::Minus, hours, minutes };
        prop_assert_eq!(resolve_pattern(&p, &now), Err(ResolveError::PastTime));
    }

    #[test]
    fn classify_is_pure(token in "\\PC{0,24}") {
        let rules = crate::rules::get();
        let matcher = Matcher::new(&rules);
        prop_assert_eq!(matcher.classify(&token), matcher.classify(&token));
    }

    #[test]
    fn classify_ignores_case_and_spacing(hours in 0u32..100, minutes in 0u32..100, pad in " {0,3}") {
        let rules = crate::rules::get();
        let matcher = Matcher::new(&rules);
        let tidy = format!("tomorrow {hours}:{minutes:02}");
        let messy = format!("{pad}ToMoRRoW {pad} {hours}:{minutes:02}{pad}");
        prop_assert_eq!(matcher.classify(&tidy), matcher.classify(&messy));
    }

    #[test]
    fn same_day_kinds_roll_over_by_exactly_one_day(
        now in fixed_offset_now(),
        hours in 0u32..24,
        minutes in 0u32..60,
        kind in 0u8..3,
    ) {
        let p = match kind {
            0 => TimePattern::Today { hours, minutes },
            1 => TimePattern::PlainTime { hours, minutes },
            _ => TimePattern::PlainHour { hours },
        };
        let (hours, minutes) = p.clock();
        let resolved = resolve_pattern(&p, &now).unwrap();
        let same_day = now.date_naive().and_hms_opt(hours, minutes, 0).unwrap();

        prop_assert_eq!((resolved.hour(), resolved.minute(), resolved.second()), (hours, minutes, 0));
        if same_day <= now.naive_local() {
            prop_assert_eq!(resolved.date_naive(), now.date_naive().succ_opt().unwrap());
        } else {
            prop_assert_eq!(resolved.date_naive(), now.date_naive());
        }
        prop_assert!(resolved > now);
    }

    #[test]
    fn weekday_lands_on_target_within_a_week(
        now in any_now(),
        target in any_weekday(),
        hours in 0u32..24,
        minutes in 0u32..60,
    ) {
        let resolved = next_occurrence(target, hours, minutes, &now).unwrap();
        let days = (resolved.date_naive() - now.date_naive()).num_days();
        prop_assert_eq!(resolved.weekday(), target);
        prop_assert!((1..=7).contains(&days), "advanced {} days", days);
    }

    #[test]
    fn out_of_range_clock_is_rejected(
        now in any_now(),
        (hours, minutes) in prop_oneof![(24u32..100, 0u32..100), (0u32..100, 60u32..100)],
    ) {
        let patterns = [
            TimePattern::RelativeOffset { sign: Sign::Plus, hours, minutes },
            TimePattern::RelativeOffset { sign: Sign::Minus, hours, minutes },
            TimePattern::Today { hours, minutes },
            TimePattern::InDays { days: 3, hours, minutes },
            TimePattern::WeekdayName { weekday: Weekday::Wed, hours, minutes },
            TimePattern::InNWeeksOnWeekday { weeks: 2, weekday: Weekday::Sun, hours, minutes },
            TimePattern::PlainTime { hours, minutes },
        ];
        for p in patterns {
            prop_assert_eq!(resolve_pattern(&p, &now), Err(ResolveError::InvalidRange { hours, minutes }));
        }
    }
}
