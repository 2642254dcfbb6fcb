//! Classification and resolution engine.
//!
//! ## How the parts work together
//!
//! ```text
//! token ── normalize_token ── TriggerInfo::scan ──┐       (matcher.rs, trigger.rs)
//!                                                 │  gate rules by BucketMask
//!                                                 v
//!                                   Matcher::classify
//!                                     - try every rule in the table
//!                                     - at most one anchored rule matches
//!                                                 │
//!                                                 v  TimePattern
//!                                   resolve_pattern (resolve.rs)
//!                                     - range check (hh ≤ 23, mm ≤ 59)
//!                                     - duration addition (relative offsets)
//!                                     - calendar-field addition (calendar.rs)
//!                                     - next weekday occurrence (weekday.rs)
//!                                                 │
//!                                                 v
//!                                        DateTime<Tz> | ResolveError
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: coarse token features and the `BucketMask` rules declare.
//! - `matcher.rs`: normalization, rule dispatch, traces.
//! - `calendar.rs`: zoned calendar arithmetic and DST disambiguation.
//! - `weekday.rs`: next occurrence of a weekday, never today.
//! - `resolve.rs`: per-pattern resolution.
//!
//! Nothing in here reads the system clock; "now" always arrives as an argument.
//!
//! ## Debugging
//!
//! Set `REMINDTIME_DEBUG_RULES=1` to print rule outcomes and resolved values.

#[path = "engine/calendar.rs"]
mod calendar;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;
#[path = "engine/weekday.rs"]
mod weekday;

#[cfg(test)]
#[path = "engine/properties.rs"]
mod properties;

pub(crate) use calendar::localize;
pub use matcher::{Attempt, MatchTrace, Matcher, RuleAttempt, normalize_token};
pub(crate) use resolve::resolve_pattern;
pub use trigger::BucketMask;
pub use weekday::next_occurrence;
