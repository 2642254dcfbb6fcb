//! The time-pattern grammar.
//!
//! Every rule is anchored at both ends, so at most one rule can match a
//! normalized token. `get` returns the table in a fixed order; the order only
//! matters for the trace output, never for the classification.

mod grammar;
mod helpers;


use crate::Rule;

pub fn get() -> Vec<Rule> {
    vec![
        grammar::rule_relative_offset(),
        grammar::rule_tomorrow(),
        grammar::rule_day_after_tomorrow(),
        grammar::rule_today(),
        grammar::rule_in_days(),
        grammar::rule_weekday(),
        grammar::rule_in_one_week(),
        grammar::rule_in_one_week_on_weekday(),
        grammar::rule_in_weeks_on_weekday(),
        grammar::rule_plain_time(),
        grammar::rule_plain_hour(),
    ]
}
