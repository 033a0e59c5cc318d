//! Lane set quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Overlap depth | Most tasks overlapping at a single point |
//! | Lane count | Rows used by the assignment |
//! | Minimal | Lane count equals overlap depth |
//! | Lane fill | Days occupied in a lane / days in the timeline range |
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//! (interval graphs: chromatic number equals maximum clique size)

use std::cmp::Ordering;

use crate::config::BoundaryRule;
use crate::error::LaneError;
use crate::models::{resolve_spans, Interval, LaneSet, Task, TimelineRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Open,
    Point,
    Close,
}

/// Maximum number of tasks overlapping at any single point.
///
/// This is the fewest lanes any assignment can use. Inverted tasks
/// (`start > end`) count as single points at their start.
///
/// # Errors
/// Fails on the first task whose bounds are missing or non-comparable,
/// or that lies on a different time axis from the first task.
pub fn max_overlap_depth<T: Interval>(
    tasks: &[T],
    boundary: BoundaryRule,
) -> Result<usize, LaneError> {
    let spans = resolve_spans(tasks)?;
    Ok(sweep_depth(&spans, boundary))
}

/// Sweep over start/end events.
///
/// At a shared point the event order encodes the boundary rule: inclusive
/// opens before it closes, exclusive closes before it opens. Zero-length
/// spans under the exclusive rule (and inverted spans) only sample the
/// running depth without holding a slot.
fn sweep_depth<P: PartialOrd + Copy>(spans: &[(P, P)], boundary: BoundaryRule) -> usize {
    let mut events: Vec<(P, EventKind)> = Vec::with_capacity(spans.len() * 2);
    for &(start, end) in spans {
        let degenerate = match boundary {
            BoundaryRule::Inclusive => start > end,
            BoundaryRule::Exclusive => start >= end,
        };
        if degenerate {
            events.push((start, EventKind::Point));
        } else {
            events.push((start, EventKind::Open));
            events.push((end, EventKind::Close));
        }
    }

    let rank = |kind: EventKind| match (boundary, kind) {
        (BoundaryRule::Inclusive, k) => k as u8,
        (BoundaryRule::Exclusive, EventKind::Close) => 0,
        (BoundaryRule::Exclusive, EventKind::Point) => 1,
        (BoundaryRule::Exclusive, EventKind::Open) => 2,
    };
    events.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| rank(a.1).cmp(&rank(b.1)))
    });

    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for (_, kind) in events {
        match kind {
            EventKind::Open => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            EventKind::Point => max_depth = max_depth.max(depth + 1),
            EventKind::Close => depth = depth.saturating_sub(1),
        }
    }
    max_depth
}

/// Lane assignment performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneKpi {
    /// Number of lanes used.
    pub lane_count: usize,
    /// Number of tasks placed.
    pub task_count: usize,
    /// Maximum overlap depth of the placed tasks.
    pub max_depth: usize,
    /// Tasks in the fullest lane.
    pub max_lane_size: usize,
    /// Mean tasks per lane.
    pub avg_lane_size: f64,
    /// Per-lane fraction of the timeline range occupied (0.0..1.0).
    pub fill_by_lane: Vec<f64>,
    /// Mean of `fill_by_lane`.
    pub avg_fill: f64,
}

impl LaneKpi {
    /// Computes metrics for a lane set under `boundary`.
    pub fn calculate(lanes: &LaneSet<'_, Task>, boundary: BoundaryRule) -> Self {
        let spans: Vec<_> = lanes
            .iter()
            .flat_map(|lane| lane.iter().map(|t| (t.start, t.end)))
            .collect();
        let max_depth = sweep_depth(&spans, boundary);

        let lane_count = lanes.len();
        let task_count = spans.len();
        let max_lane_size = lanes.iter().map(|lane| lane.len()).max().unwrap_or(0);
        let avg_lane_size = if lane_count == 0 {
            0.0
        } else {
            task_count as f64 / lane_count as f64
        };

        let fill_by_lane: Vec<f64> = match TimelineRange::from_spans(spans.iter().copied()) {
            Some(range) => {
                let total = range.total_days() as f64;
                lanes
                    .iter()
                    .map(|lane| {
                        let busy: i64 = lane.iter().map(|t| t.duration_days().max(0)).sum();
                        busy as f64 / total
                    })
                    .collect()
            }
            None => Vec::new(),
        };
        let avg_fill = if fill_by_lane.is_empty() {
            0.0
        } else {
            fill_by_lane.iter().sum::<f64>() / fill_by_lane.len() as f64
        };

        Self {
            lane_count,
            task_count,
            max_depth,
            max_lane_size,
            avg_lane_size,
            fill_by_lane,
            avg_fill,
        }
    }

    /// Whether the lane count reached the overlap-depth lower bound.
    pub fn is_minimal(&self) -> bool {
        self.lane_count == self.max_depth
    }
}
