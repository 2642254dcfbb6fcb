//! Deterministic resolution of reminder time patterns.
//!
//! An upstream extractor turns free text ("remind me to call mom in 2 hours")
//! into an activity and a time pattern drawn from a small closed grammar
//! (`+02:00`, `tomorrow 9`, `in-2-weeks friday 16:00`, ...). This crate
//! classifies that pattern and resolves it against an explicit, zoned "now".
//!
//! ```
//! use chrono::TimeZone;
//! use remindtime::{Context, resolve_token};
//!
//! let now = chrono_tz::Europe::Berlin.with_ymd_and_hms(2024, 6, 10, 13, 30, 0).unwrap();
//! let ctx = Context::new(now);
//! let due = resolve_token("today 10:00", &ctx).unwrap();
//! assert_eq!(due.iso8601(), "2024-06-11T10:00:00+02:00");
//! ```

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod extraction;
mod rules;
mod time_pattern;

pub use api::{Context, Explanation, ResolvedTime, classify, explain, resolve, resolve_token};
pub use engine::{Attempt, BucketMask, MatchTrace, RuleAttempt, next_occurrence, normalize_token};
pub use error::ResolveError;
pub use extraction::{ExtractionCode, OracleResponse, ReminderDraft, draft_reminder};
pub use time_pattern::{Sign, TimePattern};

// --- Internal types ---------------------------------------------------------

pub(crate) type Production = fn(&regex::Captures<'_>) -> Option<TimePattern>;

/// A grammar rule: a name, an anchored regex over the normalized token, the
/// token features it needs, and a `production` that builds the pattern from
/// the captures.
pub(crate) struct Rule {
    pub name: &'static str,
    pub regex: &'static Regex,
    /// Features the token must have before `regex` is tried.
    pub buckets: BucketMask,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}
