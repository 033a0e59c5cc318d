//! Date normalization for raw task records.
//!
//! Task files carry dates as strings (`"2021-01-14"`) and IDs as either
//! numbers or strings. Everything is parsed once here; the lane assigner
//! only ever sees [`NaiveDate`]s.
//!
//! Accepted date forms:
//! - `YYYY-MM-DD`
//! - RFC 3339 timestamps (`2021-01-14T09:30:00Z`), reduced to the calendar
//!   date in their own offset

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Bound, NormalizeError};
use crate::models::Task;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task identifier as written in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric ID (`"id": 3`).
    Number(i64),
    /// String ID (`"id": "design-review"`).
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// An unparsed task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    /// Identifier.
    pub id: RawId,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Start date string.
    #[serde(default)]
    pub start: Option<String>,
    /// End date string.
    #[serde(default)]
    pub end: Option<String>,
}

impl RawTask {
    /// Creates a raw record.
    pub fn new(id: RawId, name: impl Into<String>, start: &str, end: &str) -> Self {
        Self {
            id,
            name: name.into(),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    /// Parses both dates.
    pub fn normalize(&self) -> Result<Task, NormalizeError> {
        let id = self.id.to_string();
        let start = parse_field(&id, self.start.as_deref(), Bound::Start)?;
        let end = parse_field(&id, self.end.as_deref(), Bound::End)?;
        Ok(Task::new(id, start, end).with_name(self.name.clone()))
    }
}

/// Parses a calendar date in either accepted form.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
}

fn parse_field(id: &str, value: Option<&str>, bound: Bound) -> Result<NaiveDate, NormalizeError> {
    let value = value.ok_or_else(|| NormalizeError::MissingDate {
        id: id.to_string(),
        bound,
    })?;
    parse_date(value).map_err(|source| NormalizeError::InvalidDate {
        id: id.to_string(),
        bound,
        value: value.to_string(),
        source,
    })
}

/// Normalizes every record, stopping at the first failure.
pub fn normalize_all(raw: &[RawTask]) -> Result<Vec<Task>, NormalizeError> {
    raw.iter().map(RawTask::normalize).collect()
}

/// Parses a JSON array of raw task records and normalizes it.
///
/// # Example
///
/// ```
/// use u_timeline::normalize::tasks_from_json;
///
/// let tasks = tasks_from_json(r#"[
///     {"id": 1, "name": "Design", "start": "2021-01-01", "end": "2021-01-05"}
/// ]"#).unwrap();
/// assert_eq!(tasks[0].id, "1");
/// assert_eq!(tasks[0].duration_days(), 5);
/// ```
pub fn tasks_from_json(json: &str) -> Result<Vec<Task>, NormalizeError> {
    let raw: Vec<RawTask> = serde_json::from_str(json)?;
    normalize_all(&raw)
}
