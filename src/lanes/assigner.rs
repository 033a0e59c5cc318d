//! Greedy first-fit lane assigner.
//!
//! # Algorithm
//!
//! 1. Resolve each task's `(start, end)`, failing on missing or
//!    non-comparable bounds, including points that do not compare with
//!    other tasks' points.
//! 2. Sort task indices by start (stable, so equal starts keep input order).
//! 3. Track one frontier per lane: the latest end placed in it.
//! 4. Put each task in the first lane whose frontier it fits after;
//!    open a new lane when none fits.
//!
//! Processing in start order and reusing the earliest-created free lane
//! never opens more lanes than the maximum number of tasks overlapping at
//! one point, which is the lower bound.
//!
//! # Complexity
//! O(n log n + n * L) where L is the number of lanes.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use std::cmp::Ordering;

use log::{debug, trace, warn};

use crate::config::{BoundaryRule, LaneConfig, MalformedPolicy};
use crate::error::{Bound, LaneError};
use crate::models::{resolve_spans, Interval, Lane, LaneSet};

/// Partitions tasks into the minimum number of non-overlapping lanes.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_timeline::lanes::LaneAssigner;
/// use u_timeline::models::Task;
///
/// let day = |d| NaiveDate::from_ymd_opt(2021, 1, d).unwrap();
/// let tasks = vec![
///     Task::new("A", day(1), day(5)),
///     Task::new("B", day(2), day(3)),
///     Task::new("C", day(6), day(8)),
/// ];
///
/// let lanes = LaneAssigner::new().assign(&tasks).unwrap();
/// assert_eq!(lanes.ids(), vec![vec!["A", "C"], vec!["B"]]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaneAssigner {
    config: LaneConfig,
}

impl LaneAssigner {
    /// Creates an assigner with the default (inclusive, literal) settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all settings.
    pub fn with_config(mut self, config: LaneConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the boundary rule.
    pub fn with_boundary(mut self, boundary: BoundaryRule) -> Self {
        self.config.boundary = boundary;
        self
    }

    /// Sets the policy for inverted intervals.
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.config.malformed = policy;
        self
    }

    /// Current settings.
    pub fn config(&self) -> &LaneConfig {
        &self.config
    }

    /// Assigns every task to a lane.
    ///
    /// Returns lanes of references into `tasks`. The empty slice yields an
    /// empty [`LaneSet`].
    ///
    /// # Errors
    /// - [`LaneError::MissingBound`] / [`LaneError::IncomparableBound`] for
    ///   the first task whose bounds cannot be compared.
    /// - [`LaneError::InvertedInterval`] under [`MalformedPolicy::Reject`].
    pub fn assign<'a, T: Interval>(&self, tasks: &'a [T]) -> Result<LaneSet<'a, T>, LaneError> {
        if tasks.is_empty() {
            return Ok(LaneSet::empty());
        }

        let spans = self.checked_spans(tasks)?;

        let boundary = self.config.boundary;

        // Half-open zero-length spans overlap nothing that shares their
        // start, so they go ahead of longer spans with the same start.
        let zero_length =
            |i: usize| boundary == BoundaryRule::Exclusive && spans[i].0 >= spans[i].1;

        let mut order: Vec<usize> = (0..tasks.len()).collect();
        order.sort_by(|&a, &b| {
            spans[a]
                .0
                .partial_cmp(&spans[b].0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| zero_length(b).cmp(&zero_length(a)))
        });

        let mut frontiers: Vec<T::Point> = Vec::new();
        let mut lanes: Vec<Lane<'a, T>> = Vec::new();

        for idx in order {
            let (start, end) = spans[idx];
            let task = &tasks[idx];

            let mut slot = None;
            for (lane, &frontier) in frontiers.iter().enumerate() {
                if frontier.partial_cmp(&start).is_none() {
                    return Err(LaneError::IncomparableBound {
                        id: task.id().to_string(),
                        bound: Bound::Start,
                    });
                }
                if boundary.fits_after(frontier, start) {
                    slot = Some(lane);
                    break;
                }
            }

            match slot {
                Some(lane) => {
                    if end > frontiers[lane] {
                        frontiers[lane] = end;
                    }
                    lanes[lane].push(task);
                    trace!("task '{}' -> lane {lane}", task.id());
                }
                None => {
                    let lane = lanes.len();
                    frontiers.push(end);
                    let mut new_lane = Lane::new(lane);
                    new_lane.push(task);
                    lanes.push(new_lane);
                    trace!("task '{}' -> new lane {lane}", task.id());
                }
            }
        }

        debug!(
            "assigned {} tasks to {} lanes ({:?} boundary)",
            tasks.len(),
            lanes.len(),
            boundary
        );
        Ok(LaneSet::new(lanes))
    }

    fn checked_spans<T: Interval>(
        &self,
        tasks: &[T],
    ) -> Result<Vec<(T::Point, T::Point)>, LaneError> {
        let spans = resolve_spans(tasks)?;
        for (task, &(start, end)) in tasks.iter().zip(&spans) {
            if start > end {
                match self.config.malformed {
                    MalformedPolicy::Reject => {
                        return Err(LaneError::InvertedInterval {
                            id: task.id().to_string(),
                        });
                    }
                    MalformedPolicy::Literal => {
                        warn!(
                            "task '{}' starts after it ends ({start:?} > {end:?}); comparing as given",
                            task.id()
                        );
                    }
                }
            }
        }
        Ok(spans)
    }
}

/// Assigns lanes with the default settings.
///
/// Shorthand for `LaneAssigner::new().assign(tasks)`.
pub fn assign_lanes<T: Interval>(tasks: &[T]) -> Result<LaneSet<'_, T>, LaneError> {
    LaneAssigner::new().assign(tasks)
}
