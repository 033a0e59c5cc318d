//! Task model and the interval contract.
//!
//! A task is a named span of calendar days. Both ends are inclusive: a
//! task occupies every day from `start` through `end`, so a task ending on
//! a day and another starting on that same day overlap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::{Bound, LaneError};

/// A task-shaped record that can be placed on a timeline.
///
/// The lane assigner only needs an identity and two comparable time points.
/// A bound that is `None` is missing; a bound that does not compare with
/// itself (a NaN float, say) is non-comparable. Both are rejected by the
/// assigner rather than guessed at.
pub trait Interval {
    /// A point on a linear time axis.
    type Point: PartialOrd + Copy + Debug;

    /// Stable identity of the record.
    fn id(&self) -> &str;

    /// Start point, if known.
    fn start(&self) -> Option<Self::Point>;

    /// End point, if known.
    fn end(&self) -> Option<Self::Point>;

    /// Both bounds, checked for presence and comparability.
    ///
    /// An inverted span (`start > end`) is returned as is.
    fn span(&self) -> Result<(Self::Point, Self::Point), LaneError> {
        let start = checked_bound(self.id(), self.start(), Bound::Start)?;
        let end = checked_bound(self.id(), self.end(), Bound::End)?;
        if start.partial_cmp(&end).is_none() {
            return Err(LaneError::IncomparableBound {
                id: self.id().to_string(),
                bound: Bound::End,
            });
        }
        Ok((start, end))
    }
}

fn checked_bound<P: PartialOrd>(id: &str, point: Option<P>, bound: Bound) -> Result<P, LaneError> {
    let point = point.ok_or_else(|| LaneError::MissingBound {
        id: id.to_string(),
        bound,
    })?;
    // NaN-like points do not even compare with themselves.
    if point.partial_cmp(&point).is_none() {
        return Err(LaneError::IncomparableBound {
            id: id.to_string(),
            bound,
        });
    }
    Ok(point)
}

/// Checked spans of every task, in input order.
///
/// Besides the per-task [`Interval::span`] check, every point must compare
/// with the first task's start: points from unrelated time axes (different
/// zones, say) cannot be ordered against each other.
///
/// # Errors
/// The first [`LaneError`] found, naming the offending task.
pub fn resolve_spans<T: Interval>(tasks: &[T]) -> Result<Vec<(T::Point, T::Point)>, LaneError> {
    let mut spans = Vec::with_capacity(tasks.len());
    let mut axis = None;
    for task in tasks {
        let (start, end) = task.span()?;
        let origin = *axis.get_or_insert(start);
        check_axis(task.id(), (start, end), origin)?;
        spans.push((start, end));
    }
    Ok(spans)
}

pub(crate) fn check_axis<P: PartialOrd>(
    id: &str,
    span: (P, P),
    origin: P,
) -> Result<(), LaneError> {
    for (point, bound) in [(span.0, Bound::Start), (span.1, Bound::End)] {
        if point.partial_cmp(&origin).is_none() {
            return Err(LaneError::IncomparableBound {
                id: id.to_string(),
                bound,
            });
        }
    }
    Ok(())
}

/// A dated task to be placed in a lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// First day of the task.
    pub start: NaiveDate,
    /// Last day of the task (inclusive).
    pub end: NaiveDate,
    /// Domain-specific key-value metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Task {
    /// Creates a task spanning `start..=end`.
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start,
            end,
            attributes: HashMap::new(),
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Number of days covered, counting both ends.
    ///
    /// An inverted task (`start > end`) yields zero or a negative count.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `start` is after `end`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Whether two tasks share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl Interval for Task {
    type Point = NaiveDate;

    fn id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> Option<NaiveDate> {
        Some(self.start)
    }

    fn end(&self) -> Option<NaiveDate> {
        Some(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
    }

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1", day(1), day(5))
            .with_name("Kickoff")
            .with_attribute("owner", "ops");

        assert_eq!(task.id, "T1");
        assert_eq!(task.name, "Kickoff");
        assert_eq!(task.start, day(1));
        assert_eq!(task.end, day(5));
        assert_eq!(task.attributes.get("owner"), Some(&"ops".to_string()));
    }

    #[test]
    fn test_duration_days_inclusive() {
        assert_eq!(Task::new("a", day(1), day(1)).duration_days(), 1);
        assert_eq!(Task::new("b", day(1), day(5)).duration_days(), 5);
        assert_eq!(Task::new("c", day(5), day(1)).duration_days(), -3);
    }

    #[test]
    fn test_overlap_touching_days() {
        let a = Task::new("a", day(1), day(3));
        let b = Task::new("b", day(3), day(5));
        let c = Task::new("c", day(4), day(6));

        assert!(a.overlaps(&b)); // share day 3
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_point_event_overlaps_same_day() {
        let point = Task::new("p", day(2), day(2));
        let span = Task::new("s", day(1), day(2));
        assert!(point.overlaps(&span));
        assert!(point.overlaps(&point.clone()));
    }

    #[test]
    fn test_interval_impl() {
        let task = Task::new("T1", day(2), day(4));
        assert_eq!(Interval::id(&task), "T1");
        assert_eq!(Interval::start(&task), Some(day(2)));
        assert_eq!(Interval::end(&task), Some(day(4)));
        assert!(!task.is_inverted());
        assert!(Task::new("x", day(4), day(2)).is_inverted());
    }

    struct Reading {
        id: &'static str,
        start: Option<f64>,
        end: Option<f64>,
    }

    fn reading(id: &'static str, start: Option<f64>, end: Option<f64>) -> Reading {
        Reading { id, start, end }
    }

    impl Interval for Reading {
        type Point = f64;

        fn id(&self) -> &str {
            self.id
        }

        fn start(&self) -> Option<f64> {
            self.start
        }

        fn end(&self) -> Option<f64> {
            self.end
        }
    }

    #[test]
    fn test_span_checks_bounds() {
        let ok = reading("r1", Some(1.0), Some(2.5));
        assert_eq!(ok.span(), Ok((1.0, 2.5)));

        let inverted = reading("r2", Some(3.0), Some(1.0));
        assert_eq!(inverted.span(), Ok((3.0, 1.0)));

        let missing = reading("r3", Some(1.0), None);
        assert_eq!(
            missing.span(),
            Err(LaneError::MissingBound {
                id: "r3".into(),
                bound: Bound::End,
            })
        );

        let nan = reading("r4", Some(f64::NAN), Some(1.0));
        assert_eq!(
            nan.span(),
            Err(LaneError::IncomparableBound {
                id: "r4".into(),
                bound: Bound::Start,
            })
        );
    }

    #[test]
    fn test_resolve_spans() {
        let readings = vec![
            reading("r1", Some(4.0), Some(5.0)),
            reading("r2", Some(1.0), Some(2.0)),
        ];
        assert_eq!(resolve_spans(&readings), Ok(vec![(4.0, 5.0), (1.0, 2.0)]));
        assert_eq!(resolve_spans::<Reading>(&[]), Ok(Vec::new()));
    }

    /// A timestamp that only orders against timestamps in the same zone.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Stamp {
        zone: u8,
        t: i64,
    }

    impl PartialOrd for Stamp {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            if self.zone == other.zone {
                self.t.partial_cmp(&other.t)
            } else {
                None
            }
        }
    }

    struct Shift {
        id: &'static str,
        start: Stamp,
        end: Stamp,
    }

    impl Interval for Shift {
        type Point = Stamp;

        fn id(&self) -> &str {
            self.id
        }

        fn start(&self) -> Option<Stamp> {
            Some(self.start)
        }

        fn end(&self) -> Option<Stamp> {
            Some(self.end)
        }
    }

    #[test]
    fn test_resolve_spans_rejects_foreign_axis() {
        let at = |zone, t| Stamp { zone, t };
        let shifts = vec![
            Shift {
                id: "a",
                start: at(0, 1),
                end: at(0, 2),
            },
            Shift {
                id: "b",
                start: at(1, 5),
                end: at(1, 6),
            },
        ];
        assert_eq!(
            resolve_spans(&shifts),
            Err(LaneError::IncomparableBound {
                id: "b".into(),
                bound: Bound::Start,
            })
        );

        // Same-zone start but an end from another zone.
        let shifts = vec![Shift {
            id: "c",
            start: at(0, 1),
            end: at(2, 9),
        }];
        assert_eq!(
            resolve_spans(&shifts),
            Err(LaneError::IncomparableBound {
                id: "c".into(),
                bound: Bound::End,
            })
        );
    }

    #[test]
    fn test_task_span() {
        let task = Task::new("T1", day(3), day(7));
        assert_eq!(task.span(), Ok((day(3), day(7))));
    }
}
