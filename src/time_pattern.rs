use chrono::Weekday;

/// Direction of a relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub(crate) fn from_symbol(symbol: &str) -> Option<Sign> {
        match symbol {
            "+" => Some(Sign::Plus),
            "-" => Some(Sign::Minus),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A classified time pattern, one variant per grammar rule.
///
/// Hours and minutes are carried exactly as captured (one or two digits) and
/// are range-checked only at resolution time, so `25:00` classifies fine and
/// then fails with [`ResolveError::InvalidRange`](crate::ResolveError::InvalidRange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePattern {
    /// `+HH:MM` / `-HH:MM`
    RelativeOffset { sign: Sign, hours: u32, minutes: u32 },
    /// `tomorrow HH[:MM]`
    Tomorrow { hours: u32, minutes: u32 },
    /// `day-after-tomorrow HH[:MM]`, `overmorrow HH[:MM]`
    DayAfterTomorrow { hours: u32, minutes: u32 },
    /// `today HH[:MM]`
    Today { hours: u32, minutes: u32 },
    /// `in-N-days HH[:MM]`
    InDays { days: u32, hours: u32, minutes: u32 },
    /// `<weekday> HH[:MM]`
    WeekdayName { weekday: Weekday, hours: u32, minutes: u32 },
    /// `in-one-week HH[:MM]`
    InOneWeek { hours: u32, minutes: u32 },
    /// `in-one-week <weekday> HH[:MM]`
    InOneWeekOnWeekday { weekday: Weekday, hours: u32, minutes: u32 },
    /// `in-N-weeks <weekday> HH[:MM]`
    InNWeeksOnWeekday { weeks: u32, weekday: Weekday, hours: u32, minutes: u32 },
    /// `HH:MM`
    PlainTime { hours: u32, minutes: u32 },
    /// `HH`
    PlainHour { hours: u32 },
}

impl TimePattern {
    /// Stable rule name, used in traces and reminder drafts.
    pub fn name(&self) -> &'static str {
        match self {
            TimePattern::RelativeOffset { .. } => "relative-offset",
            TimePattern::Tomorrow { .. } => "tomorrow",
            TimePattern::DayAfterTomorrow { .. } => "day-after-tomorrow",
            TimePattern::Today { .. } => "today",
            TimePattern::InDays { .. } => "in-n-days",
            TimePattern::WeekdayName { .. } => "weekday",
            TimePattern::InOneWeek { .. } => "in-one-week",
            TimePattern::InOneWeekOnWeekday { .. } => "in-one-week-on-weekday",
            TimePattern::InNWeeksOnWeekday { .. } => "in-n-weeks-on-weekday",
            TimePattern::PlainTime { .. } => "plain-time",
            TimePattern::PlainHour { .. } => "plain-hour",
        }
    }

    /// The `(hours, minutes)` pair every variant carries. For a relative
    /// offset this is the offset length, not a wall-clock time.
    pub fn clock(&self) -> (u32, u32) {
        match *self {
            TimePattern::RelativeOffset { hours, minutes, .. }
            | TimePattern::Tomorrow { hours, minutes }
            | TimePattern::DayAfterTomorrow { hours, minutes }
            | TimePattern::Today { hours, minutes }
            | TimePattern::InDays { hours, minutes, .. }
            | TimePattern::WeekdayName { hours, minutes, .. }
            | TimePattern::InOneWeek { hours, minutes }
            | TimePattern::InOneWeekOnWeekday { hours, minutes, .. }
            | TimePattern::InNWeeksOnWeekday { hours, minutes, .. }
            | TimePattern::PlainTime { hours, minutes } => (hours, minutes),
            TimePattern::PlainHour { hours } => (hours, 0),
        }
    }

    /// Monday-based weekday index (0 = Monday .. 6 = Sunday) for
    /// weekday-bearing variants.
    pub fn weekday_index(&self) -> Option<u32> {
        match self {
            TimePattern::WeekdayName { weekday, .. }
            | TimePattern::InOneWeekOnWeekday { weekday, .. }
            | TimePattern::InNWeeksOnWeekday { weekday, .. } => Some(weekday.num_days_from_monday()),
            _ => None,
        }
    }
}
