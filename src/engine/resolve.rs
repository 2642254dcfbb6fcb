//! Time resolution.
//!
//! Turns a classified [`TimePattern`] plus a reference instant into an
//! absolute, zoned timestamp.
//!
//! ```text
//! TimePattern ──▶ range check ──┬─ RelativeOffset  -> PastTime | now + duration
//!                               ├─ Tomorrow/…/InDays -> date + n days @ hh:mm
//!                               ├─ Today/PlainTime/PlainHour -> today @ hh:mm, rolled if ≤ now
//!                               ├─ InOneWeek        -> date + 7 days @ hh:mm
//!                               └─ weekday kinds    -> next occurrence (+ n weeks)
//! ```
//!
//! Every branch is pure: the only clock is the `now` argument.

use chrono::{DateTime, Days, Duration, Weekday};
use chrono_tz::Tz;

use super::calendar::{at_clock, days_ahead_at, next_clock_time};
use super::weekday::{next_occurrence, next_occurrence_date};
use crate::error::{ResolveError, Result};
use crate::time_pattern::{Sign, TimePattern};

const MAX_HOURS: u32 = 23;
const MAX_MINUTES: u32 = 59;

pub(crate) fn resolve_pattern(pattern: &TimePattern, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let (hours, minutes) = pattern.clock();
    if hours > MAX_HOURS || minutes > MAX_MINUTES {
        return Err(ResolveError::InvalidRange { hours, minutes });
    }
    // Only reachable on calendar overflow at the far end of chrono's range.
    let overflow = || ResolveError::InvalidRange { hours, minutes };

    let resolved = match *pattern {
        TimePattern::RelativeOffset { sign: Sign::Minus, .. } => return Err(ResolveError::PastTime),
        TimePattern::RelativeOffset { sign: Sign::Plus, .. } => {
            now.checked_add_signed(Duration::minutes(i64::from(hours * 60 + minutes)))
        }
        TimePattern::Tomorrow { .. } => days_ahead_at(now, 1, hours, minutes),
        TimePattern::DayAfterTomorrow { .. } => days_ahead_at(now, 2, hours, minutes),
        TimePattern::InDays { days, .. } => days_ahead_at(now, u64::from(days), hours, minutes),
        TimePattern::InOneWeek { .. } => days_ahead_at(now, 7, hours, minutes),
        TimePattern::Today { .. } | TimePattern::PlainTime { .. } | TimePattern::PlainHour { .. } => {
            next_clock_time(now, hours, minutes)
        }
        // "in one week on <weekday>" resolves exactly like "<weekday>"; see DESIGN.md.
        TimePattern::WeekdayName { weekday, .. } | TimePattern::InOneWeekOnWeekday { weekday, .. } => {
            next_occurrence(weekday, hours, minutes, now)
        }
        TimePattern::InNWeeksOnWeekday { weeks, weekday, .. } => {
            weeks_after_occurrence(weekday, weeks, hours, minutes, now)
        }
    };

    let resolved = resolved.ok_or_else(overflow)?;

    if std::env::var_os("REMINDTIME_DEBUG_RULES").is_some() {
        eprintln!("[resolve] pattern={:?} now={} value={}", pattern, now.to_rfc3339(), resolved.to_rfc3339());
    }

    Ok(resolved)
}

/// Next occurrence of `weekday`, pushed out by `weeks` additional whole weeks.
fn weeks_after_occurrence(
    weekday: Weekday,
    weeks: u32,
    hours: u32,
    minutes: u32,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let base = next_occurrence_date(weekday, now.date_naive())?;
    let date = base.checked_add_days(Days::new(u64::from(weeks) * 7))?;
    at_clock(&now.timezone(), date, hours, minutes)
}
