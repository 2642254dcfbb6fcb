//! Capture extraction helpers shared by the grammar rules.

use chrono::Weekday;
use regex::Captures;

/// Text of capture group `idx`, if it participated in the match.
pub fn group<'t>(caps: &Captures<'t>, idx: usize) -> Option<&'t str> {
    caps.get(idx).map(|m| m.as_str())
}

/// Capture group `idx` parsed as an unsigned integer.
pub fn group_u32(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    group(caps, idx)?.parse().ok()
}

/// `HH[:MM]` starting at group `hour_idx`; the minute group is the next one
/// and defaults to zero when absent.
pub fn clock(caps: &Captures<'_>, hour_idx: usize) -> Option<(u32, u32)> {
    let hours = group_u32(caps, hour_idx)?;
    let minutes = match caps.get(hour_idx + 1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    Some((hours, minutes))
}

/// Map an English weekday name or common abbreviation to a `Weekday`.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn clock_defaults_missing_minutes_to_zero() {
        let re = Regex::new(r"^([0-9]{1,2})(?::([0-9]{1,2}))?$").unwrap();
        assert_eq!(clock(&re.captures("7").unwrap(), 1), Some((7, 0)));
        assert_eq!(clock(&re.captures("07:05").unwrap(), 1), Some((7, 5)));
    }

    #[test]
    fn weekday_names_and_abbreviations() {
        assert_eq!(weekday_from_name("thurs"), Some(Weekday::Thu));
        assert_eq!(weekday_from_name("sunday"), Some(Weekday::Sun));
        assert_eq!(weekday_from_name("someday"), None);
    }
}
