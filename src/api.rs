use crate::engine::{self, MatchTrace, Matcher};
use crate::error::ResolveError;
use crate::{Rule, TimePattern};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::fmt;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::get);

/// Resolution context.
///
/// Holds the reference clock: the instant and IANA zone that relative
/// patterns ("today", "+01:00", "friday 9") are resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub reference_time: DateTime<Tz>,
}

impl Context {
    pub fn new(reference_time: DateTime<Tz>) -> Self {
        Self { reference_time }
    }

    /// The current system time in `tz`.
    pub fn now(tz: Tz) -> Self {
        Self { reference_time: Utc::now().with_timezone(&tz) }
    }

    /// A local wall-clock reading in `tz`, disambiguated the same way resolved
    /// times are. `None` only if the date is outside chrono's range.
    pub fn at_local(local: NaiveDateTime, tz: Tz) -> Option<Self> {
        engine::localize(&tz, local).map(Self::new)
    }

    pub fn timezone(&self) -> Tz {
        self.reference_time.timezone()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::now(Tz::UTC)
    }
}

/// A successfully resolved reminder time.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTime {
    pub instant: DateTime<Tz>,
    /// The pattern this instant was resolved from.
    pub pattern: TimePattern,
}

impl ResolvedTime {
    /// ISO-8601 with explicit offset and second precision,
    /// e.g. `2024-06-10T15:45:00+02:00`.
    pub fn iso8601(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }
}

impl fmt::Display for ResolvedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso8601())
    }
}

/// Classify a raw time-pattern token against the grammar.
///
/// The token is normalized first (trimmed, lower-cased, whitespace
/// collapsed). Returns `None` when no rule matches.
///
/// # Example
/// ```
/// use remindtime::{Sign, TimePattern, classify};
///
/// assert_eq!(
///     classify(" -01:00 "),
///     Some(TimePattern::RelativeOffset { sign: Sign::Minus, hours: 1, minutes: 0 })
/// );
/// assert_eq!(classify("whenever"), None);
/// ```
pub fn classify(token: &str) -> Option<TimePattern> {
    Matcher::new(&DEFAULT_RULES).classify(token)
}

/// Resolve a classified pattern against `context`'s reference clock.
///
/// # Errors
///
/// - [`ResolveError::InvalidRange`] if the hour exceeds 23 or the minute 59.
/// - [`ResolveError::PastTime`] for any negative relative offset.
pub fn resolve(pattern: &TimePattern, context: &Context) -> Result<ResolvedTime, ResolveError> {
    let instant = engine::resolve_pattern(pattern, &context.reference_time)?;
    Ok(ResolvedTime { instant, pattern: *pattern })
}

/// [`classify`] then [`resolve`], with an unmatched token reported as
/// [`ResolveError::Unrecognized`].
pub fn resolve_token(token: &str, context: &Context) -> Result<ResolvedTime, ResolveError> {
    let pattern = classify(token).ok_or_else(|| ResolveError::Unrecognized(token.trim().to_string()))?;
    resolve(&pattern, context)
}

/// Everything [`explain`] learned about a token.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub token: String,
    pub reference_time: DateTime<Tz>,
    pub trace: MatchTrace,
    pub result: Result<ResolvedTime, ResolveError>,
    pub elapsed: Duration,
}

/// Classify and resolve `token`, keeping the per-rule trace.
///
/// This is what the CLI prints; [`resolve_token`] skips the bookkeeping.
pub fn explain(token: &str, context: &Context) -> Explanation {
    let start = Instant::now();
    let trace = Matcher::new(&DEFAULT_RULES).trace(token);
    let result = match trace.pattern() {
        Some(pattern) => resolve(&pattern, context),
        None => Err(ResolveError::Unrecognized(token.trim().to_string())),
    };

    Explanation {
        token: token.to_string(),
        reference_time: context.reference_time,
        trace,
        result,
        elapsed: start.elapsed(),
    }
}
