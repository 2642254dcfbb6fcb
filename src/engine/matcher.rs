//! Pattern classification.
//!
//! The matcher owns token normalization (trim, lower-case, collapse internal
//! whitespace) and then offers the token to every rule in the table. Rules are
//! anchored, so at most one should match; an overlap is a grammar bug and
//! trips a debug assertion.

use super::trigger::{BucketMask, TriggerInfo};
use crate::{Rule, TimePattern};

/// Outcome of offering a token to one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// Skipped: the token lacks a feature the rule requires.
    Gated,
    /// The regex did not match.
    Missed,
    /// The regex matched and produced a pattern.
    Matched,
}

#[derive(Debug, Clone)]
pub struct RuleAttempt {
    pub rule: &'static str,
    pub outcome: Attempt,
}

/// A full classification run, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct MatchTrace {
    pub normalized: String,
    pub buckets: BucketMask,
    pub attempts: Vec<RuleAttempt>,
    /// Every `(rule name, pattern)` that matched, in table order.
    pub matches: Vec<(&'static str, TimePattern)>,
}

impl MatchTrace {
    pub fn pattern(&self) -> Option<TimePattern> {
        self.matches.first().map(|(_, pattern)| *pattern)
    }

    pub fn rule(&self) -> Option<&'static str> {
        self.matches.first().map(|(rule, _)| *rule)
    }
}

/// Trim, lower-case, and collapse runs of whitespace to a single space.
pub fn normalize_token(token: &str) -> String {
    token.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

pub struct Matcher<'r> {
    rules: &'r [Rule],
}

impl<'r> Matcher<'r> {
    pub fn new(rules: &'r [Rule]) -> Self {
        Matcher { rules }
    }

    pub fn classify(&self, token: &str) -> Option<TimePattern> {
        self.trace(token).pattern()
    }

    /// Classify `token`, recording what each rule did with it.
    pub fn trace(&self, token: &str) -> MatchTrace {
        let normalized = normalize_token(token);
        let trigger = TriggerInfo::scan(&normalized);
        let debug = std::env::var_os("REMINDTIME_DEBUG_RULES").is_some();

        let mut attempts = Vec::with_capacity(self.rules.len());
        let mut matches = Vec::new();

        for rule in self.rules {
            let outcome = if !trigger.admits(rule.buckets) {
                Attempt::Gated
            } else {
                match rule.regex.captures(&normalized).and_then(|caps| (rule.production)(&caps)) {
                    Some(pattern) => {
                        matches.push((rule.name, pattern));
                        Attempt::Matched
                    }
                    None => Attempt::Missed,
                }
            };

            if debug && outcome != Attempt::Gated {
                eprintln!("[matcher] token=\"{}\" rule=\"{}\" outcome={:?}", normalized, rule.name, outcome);
            }
            attempts.push(RuleAttempt { rule: rule.name, outcome });
        }

        debug_assert!(
            matches.len() <= 1,
            "grammar rules overlap on \"{}\": {:?}",
            normalized,
            matches.iter().map(|(rule, _)| *rule).collect::<Vec<_>>()
        );

        MatchTrace { normalized, buckets: trigger.buckets, attempts, matches }
    }
}
