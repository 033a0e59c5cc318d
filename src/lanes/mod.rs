//! Lane assignment and lane metrics.
//!
//! `LaneAssigner` partitions tasks into rows so that no two tasks in a row
//! overlap, using as few rows as the input allows.
//!
//! # Algorithm
//!
//! Greedy interval partitioning: tasks are taken in start order and each
//! goes into the first existing lane it fits after. This is optimal for
//! intervals: the lane count equals the maximum overlap depth.
//!
//! # Metrics
//!
//! `max_overlap_depth` computes that lower bound independently;
//! `LaneKpi` summarizes a finished lane set.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

mod assigner;
mod metrics;

pub use assigner::{assign_lanes, LaneAssigner};
pub use metrics::{max_overlap_depth, LaneKpi};
