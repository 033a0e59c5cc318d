//! Error types.
//!
//! Lane assignment fails fast on the first task whose bounds cannot be
//! used; normalization and configuration loading report the offending
//! record or file.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which end of an interval an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The interval start.
    Start,
    /// The interval end.
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors raised by lane assignment and overlap-depth computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    /// A task does not expose one of its bounds.
    #[error("task '{id}' has no {bound} time")]
    MissingBound {
        /// Offending task ID.
        id: String,
        /// The missing bound.
        bound: Bound,
    },

    /// A bound cannot be ordered against other time points.
    #[error("task '{id}' has a {bound} time that cannot be compared")]
    IncomparableBound {
        /// Offending task ID.
        id: String,
        /// The bound that failed to compare.
        bound: Bound,
    },

    /// A task starts after it ends (only under `MalformedPolicy::Reject`).
    #[error("task '{id}' starts after it ends")]
    InvertedInterval {
        /// Offending task ID.
        id: String,
    },
}

/// Errors raised while turning raw task records into [`Task`](crate::models::Task)s.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A raw record has no value for a date field.
    #[error("task '{id}' is missing its {bound} date")]
    MissingDate {
        /// Offending task ID.
        id: String,
        /// The missing field.
        bound: Bound,
    },

    /// A date string is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("task '{id}' has an invalid {bound} date '{value}'")]
    InvalidDate {
        /// Offending task ID.
        id: String,
        /// The field that failed to parse.
        bound: Bound,
        /// The raw value.
        value: String,
        /// Underlying parser error.
        #[source]
        source: chrono::ParseError,
    },

    /// The input is not a JSON array of task records.
    #[error("invalid task JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading a [`LaneConfig`](crate::config::LaneConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for `LaneConfig`.
    #[error("invalid lane config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_error_messages() {
        let e = LaneError::MissingBound {
            id: "t1".into(),
            bound: Bound::End,
        };
        assert_eq!(e.to_string(), "task 't1' has no end time");

        let e = LaneError::IncomparableBound {
            id: "t2".into(),
            bound: Bound::Start,
        };
        assert_eq!(e.to_string(), "task 't2' has a start time that cannot be compared");

        let e = LaneError::InvertedInterval { id: "t3".into() };
        assert_eq!(e.to_string(), "task 't3' starts after it ends");
    }
}
