//! Global date range of a task set.
//!
//! Renderers lay every lane against the same range: from the earliest
//! task start to the latest task end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Task;

/// Earliest start and latest end across a set of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRange {
    /// Earliest task start.
    pub start: NaiveDate,
    /// Latest task end (inclusive).
    pub end: NaiveDate,
}

impl TimelineRange {
    /// Creates a range directly.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Computes the range spanned by `tasks`.
    ///
    /// Returns `None` for an empty slice.
    pub fn of(tasks: &[Task]) -> Option<Self> {
        Self::from_spans(tasks.iter().map(|t| (t.start, t.end)))
    }

    /// Computes the range spanned by `(start, end)` pairs.
    ///
    /// Returns `None` when `spans` is empty.
    pub fn from_spans(spans: impl IntoIterator<Item = (NaiveDate, NaiveDate)>) -> Option<Self> {
        spans.into_iter().fold(None, |range: Option<Self>, (start, end)| {
            Some(match range {
                None => Self { start, end },
                Some(range) => Self {
                    start: range.start.min(start),
                    end: range.end.max(end),
                },
            })
        })
    }

    /// Number of days in the range, counting both ends.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Days from the range start to `date` (negative before the start).
    pub fn offset_days(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Whether `date` falls within the range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
