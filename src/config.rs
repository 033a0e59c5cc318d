//! Lane assignment configuration.
//!
//! ```toml
//! boundary = "inclusive"   # or "exclusive"
//! malformed = "literal"    # or "reject"
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How touching interval ends are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryRule {
    /// Closed intervals: a task ending on a day overlaps a task starting
    /// on that day.
    #[default]
    Inclusive,
    /// Half-open intervals: back-to-back tasks do not overlap.
    Exclusive,
}

impl BoundaryRule {
    /// Whether a task starting at `start` fits after a lane whose latest
    /// end is `frontier`.
    #[inline]
    pub fn fits_after<P: PartialOrd>(self, frontier: P, start: P) -> bool {
        match self {
            Self::Inclusive => frontier < start,
            Self::Exclusive => frontier <= start,
        }
    }

    /// Whether two `(start, end)` intervals overlap.
    pub fn overlaps<P: PartialOrd>(self, a: (P, P), b: (P, P)) -> bool {
        match self {
            Self::Inclusive => a.0 <= b.1 && b.0 <= a.1,
            Self::Exclusive => a.0 < b.1 && b.0 < a.1,
        }
    }
}

/// What to do with a task whose start is after its end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Compare the bounds as given.
    #[default]
    Literal,
    /// Fail with [`LaneError::InvertedInterval`](crate::error::LaneError::InvertedInterval).
    Reject,
}

/// Settings for a [`LaneAssigner`](crate::lanes::LaneAssigner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneConfig {
    /// Overlap rule for touching ends.
    pub boundary: BoundaryRule,
    /// Handling of inverted intervals.
    pub malformed: MalformedPolicy,
}

impl LaneConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
