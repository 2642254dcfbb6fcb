//! Error types for classification and resolution.

use thiserror::Error;

/// Why a time pattern could not be turned into an absolute timestamp.
///
/// These are routine outcomes of user input, returned as values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The token matched no grammar rule.
    #[error("could not determine a time from '{0}'")]
    Unrecognized(String),

    /// Structurally valid, but the hour or minute is out of range (e.g. `25:00`).
    #[error("invalid time format: {hours:02}:{minutes:02}")]
    InvalidRange { hours: u32, minutes: u32 },

    /// The pattern explicitly points backwards in time.
    #[error("cannot set a reminder in the past")]
    PastTime,
}

pub type Result<T> = std::result::Result<T, ResolveError>;
