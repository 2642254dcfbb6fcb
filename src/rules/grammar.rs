//! Grammar rules, one per `TimePattern` variant.

use crate::engine::BucketMask;
use crate::rules::helpers::{clock, group, group_u32, weekday_from_name};
use crate::time_pattern::{Sign, TimePattern};
use crate::Rule;

/// "+02:15", "-01:00"
pub fn rule_relative_offset() -> Rule {
    rule! {
        name: "<sign><hh>:<mm>",
        pattern: r"^([+-])([0-9]{1,2}):([0-9]{1,2})$",
        buckets: BucketMask::SIGNED | BucketMask::HAS_COLON | BucketMask::HAS_DIGITS,
        prod: |caps| {
            Some(TimePattern::RelativeOffset {
                sign: Sign::from_symbol(group(caps, 1)?)?,
                hours: group_u32(caps, 2)?,
                minutes: group_u32(caps, 3)?,
            })
        }
    }
}

/// "tomorrow 9", "tomorrow 09:30"
pub fn rule_tomorrow() -> Rule {
    rule! {
        name: "tomorrow <time>",
        pattern: r"^tomorrow ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::HAS_WORD | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let (hours, minutes) = clock(caps, 1)?;
            Some(TimePattern::Tomorrow { hours, minutes })
        }
    }
}

/// "day-after-tomorrow 18:00", "day after tomorrow 9", "overmorrow 7"
pub fn rule_day_after_tomorrow() -> Rule {
    rule! {
        name: "day after tomorrow <time>",
        pattern: r"^(?:day-after-tomorrow|day after tomorrow|overmorrow) ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::HAS_WORD | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let (hours, minutes) = clock(caps, 1)?;
            Some(TimePattern::DayAfterTomorrow { hours, minutes })
        }
    }
}

/// "today 14:00"
pub fn rule_today() -> Rule {
    rule! {
        name: "today <time>",
        pattern: r"^today ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::HAS_WORD | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let (hours, minutes) = clock(caps, 1)?;
            Some(TimePattern::Today { hours, minutes })
        }
    }
}

/// "in-3-days 10:00", "in-1-day 8"
pub fn rule_in_days() -> Rule {
    rule! {
        name: "in <n> days <time>",
        pattern: r"^in-([0-9]{1,4})-days? ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::HAS_WORD | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let days = group_u32(caps, 1)?;
            let (hours, minutes) = clock(caps, 2)?;
            Some(TimePattern::InDays { days, hours, minutes })
        }
    }
}

/// "monday 09:00", "fri 17"
pub fn rule_weekday() -> Rule {
    rule! {
        name: "<weekday> <time>",
        pattern: r"^(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun) ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::WEEKDAYISH | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let weekday = weekday_from_name(group(caps, 1)?)?;
            let (hours, minutes) = clock(caps, 2)?;
            Some(TimePattern::WeekdayName { weekday, hours, minutes })
        }
    }
}

/// "in-one-week 12:00"
pub fn rule_in_one_week() -> Rule {
    rule! {
        name: "in one week <time>",
        pattern: r"^in-one-week ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::HAS_WORD | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let (hours, minutes) = clock(caps, 1)?;
            Some(TimePattern::InOneWeek { hours, minutes })
        }
    }
}

/// "in-one-week tuesday 08:15"
pub fn rule_in_one_week_on_weekday() -> Rule {
    rule! {
        name: "in one week <weekday> <time>",
        pattern: r"^in-one-week (monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun) ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::WEEKDAYISH | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let weekday = weekday_from_name(group(caps, 1)?)?;
            let (hours, minutes) = clock(caps, 2)?;
            Some(TimePattern::InOneWeekOnWeekday { weekday, hours, minutes })
        }
    }
}

/// "in-2-weeks friday 16:00"
pub fn rule_in_weeks_on_weekday() -> Rule {
    rule! {
        name: "in <n> weeks <weekday> <time>",
        pattern: r"^in-([0-9]{1,3})-weeks (monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun) ([0-9]{1,2})(?::([0-9]{1,2}))?$",
        buckets: BucketMask::WEEKDAYISH | BucketMask::HAS_DIGITS,
        prod: |caps| {
            let weeks = group_u32(caps, 1)?;
            let weekday = weekday_from_name(group(caps, 2)?)?;
            let (hours, minutes) = clock(caps, 3)?;
            Some(TimePattern::InNWeeksOnWeekday { weeks, weekday, hours, minutes })
        }
    }
}

/// "18:45"
pub fn rule_plain_time() -> Rule {
    rule! {
        name: "<hh>:<mm>",
        pattern: r"^([0-9]{1,2}):([0-9]{1,2})$",
        buckets: BucketMask::HAS_COLON | BucketMask::HAS_DIGITS,
        prod: |caps| {
            Some(TimePattern::PlainTime { hours: group_u32(caps, 1)?, minutes: group_u32(caps, 2)? })
        }
    }
}

/// "9" (a bare hour)
pub fn rule_plain_hour() -> Rule {
    rule! {
        name: "<hh>",
        pattern: r"^([0-9]{1,2})$",
        buckets: BucketMask::HAS_DIGITS,
        prod: |caps| {
            Some(TimePattern::PlainHour { hours: group_u32(caps, 1)? })
        }
    }
}
