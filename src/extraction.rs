//! The boundary with the upstream extractor.
//!
//! The extractor answers with either an activity plus a time pattern or one
//! of a closed set of error codes. [`draft_reminder`] turns that answer into a
//! [`ReminderDraft`] ready to be stored, or into the code the caller should
//! surface. Resolver failures are mapped by variant, never by message text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{Context, resolve_token};
use crate::error::ResolveError;

/// The extractor's closed set of failure codes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractionCode {
    #[error("neither an activity nor a time could be found")]
    NoActivityAndTime,
    #[error("could not determine a time")]
    NoTime,
    #[error("could not determine what to remind you of")]
    NoActivity,
    #[error("invalid time format")]
    InvalidTimeFormat,
    #[error("cannot set a reminder in the past")]
    PastTime,
    #[error("this reminder already exists")]
    DuplicateData,
}

impl From<ResolveError> for ExtractionCode {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Unrecognized(_) => ExtractionCode::NoTime,
            ResolveError::InvalidRange { .. } => ExtractionCode::InvalidTimeFormat,
            ResolveError::PastTime => ExtractionCode::PastTime,
        }
    }
}

/// What the extractor returned for one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OracleResponse {
    Extracted {
        activity: String,
        #[serde(rename = "timePattern")]
        time_pattern: String,
    },
    Failed {
        error: ExtractionCode,
    },
}

impl OracleResponse {
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

/// A reminder ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDraft {
    pub activity: String,
    /// ISO-8601 with explicit offset.
    pub due: String,
    /// Name of the time-pattern rule that produced `due`.
    pub rule: &'static str,
}

/// Combine an extractor response with the reference clock.
///
/// # Errors
///
/// Extractor codes pass through unchanged. Blank fields map to `NO_ACTIVITY`,
/// `NO_TIME` or `NO_ACTIVITY_AND_TIME`; resolution failures map through
/// `From<ResolveError>`.
pub fn draft_reminder(response: OracleResponse, context: &Context) -> Result<ReminderDraft, ExtractionCode> {
    let (activity, time_pattern) = match response {
        OracleResponse::Failed { error } => return Err(error),
        OracleResponse::Extracted { activity, time_pattern } => (activity, time_pattern),
    };

    let activity = activity.trim();
    match (activity.is_empty(), time_pattern.trim().is_empty()) {
        (true, true) => return Err(ExtractionCode::NoActivityAndTime),
        (false, true) => return Err(ExtractionCode::NoTime),
        (true, false) => return Err(ExtractionCode::NoActivity),
        (false, false) => {}
    }

    let resolved = resolve_token(&time_pattern, context)?;
    Ok(ReminderDraft { activity: activity.to_string(), due: resolved.iso8601(), rule: resolved.pattern.name() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference_context() -> Context {
        Context::new(chrono_tz::Europe::Berlin.with_ymd_and_hms(2024, 6, 10, 13, 30, 0).unwrap())
    }

    fn extracted(activity: &str, time_pattern: &str) -> OracleResponse {
        OracleResponse::Extracted { activity: activity.to_string(), time_pattern: time_pattern.to_string() }
    }

    #[test]
    fn parses_success_payload() {
        let r = OracleResponse::from_json(r#"{"activity": "call mom", "timePattern": "+02:00"}"#).unwrap();
        assert_eq!(r, extracted("call mom", "+02:00"));
    }

    #[test]
    fn parses_error_payload() {
        let r = OracleResponse::from_json(r#"{"error": "NO_ACTIVITY_AND_TIME"}"#).unwrap();
        assert_eq!(r, OracleResponse::Failed { error: ExtractionCode::NoActivityAndTime });
    }

    #[test]
    fn rejects_unknown_error_code() {
        assert!(OracleResponse::from_json(r#"{"error": "SOMETHING_ELSE"}"#).is_err());
    }

    #[test]
    fn drafts_reminder_with_trimmed_activity() {
        let draft = draft_reminder(extracted("  call mom ", "+02:00"), &reference_context()).unwrap();
        assert_eq!(
            draft,
            ReminderDraft {
                activity: "call mom".to_string(),
                due: "2024-06-10T15:30:00+02:00".to_string(),
                rule: "relative-offset",
            }
        );
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = draft_reminder(extracted("water plants", "sunday 10"), &reference_context()).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["due"], "2024-06-16T10:00:00+02:00");
        assert_eq!(json["rule"], "weekday");
        assert_eq!(json["activity"], "water plants");
    }

    #[test]
    fn oracle_errors_pass_through() {
        let ctx = reference_context();
        let r = draft_reminder(OracleResponse::Failed { error: ExtractionCode::DuplicateData }, &ctx);
        assert_eq!(r, Err(ExtractionCode::DuplicateData));
    }

    #[test]
    fn blank_fields_map_to_missing_codes() {
        let ctx = reference_context();
        assert_eq!(draft_reminder(extracted(" ", ""), &ctx), Err(ExtractionCode::NoActivityAndTime));
        assert_eq!(draft_reminder(extracted("call mom", " "), &ctx), Err(ExtractionCode::NoTime));
        assert_eq!(draft_reminder(extracted("", "9"), &ctx), Err(ExtractionCode::NoActivity));
    }

    #[test]
    fn resolver_failures_map_by_variant() {
        let ctx = reference_context();
        assert_eq!(draft_reminder(extracted("x", "-00:30"), &ctx), Err(ExtractionCode::PastTime));
        assert_eq!(draft_reminder(extracted("x", "25:00"), &ctx), Err(ExtractionCode::InvalidTimeFormat));
        assert_eq!(draft_reminder(extracted("x", "next blue moon"), &ctx), Err(ExtractionCode::NoTime));
    }

    #[test]
    fn codes_serialize_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&ExtractionCode::InvalidTimeFormat).unwrap(), "\"INVALID_TIME_FORMAT\"");
        assert_eq!(ExtractionCode::PastTime.to_string(), "cannot set a reminder in the past");
    }
}
