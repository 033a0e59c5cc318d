//! Timeline lane assignment.
//!
//! Places dated tasks into horizontal lanes so that overlapping tasks sit
//! in different lanes and the number of lanes is as small as possible.
//! Rendering (pixel geometry, zoom, colors, tooltips) is left to the
//! caller, which consumes the resulting [`LaneSet`](models::LaneSet).
//!
//! # Modules
//!
//! - **`models`**: `Task`, the `Interval` contract, `Lane`, `LaneSet`,
//!   `TimelineRange`
//! - **`lanes`**: `LaneAssigner` (greedy interval partitioning) and
//!   lane metrics
//! - **`normalize`**: raw date strings and JSON records to `Task`s
//! - **`validation`**: input integrity checks (duplicate IDs, inverted
//!   intervals, missing bounds)
//! - **`config`**: boundary rule and malformed-interval policy
//! - **`error`**: error types
//!
//! # Example
//!
//! ```
//! use u_timeline::lanes::assign_lanes;
//! use u_timeline::normalize::tasks_from_json;
//!
//! let tasks = tasks_from_json(r#"[
//!     {"id": 1, "name": "Design", "start": "2021-01-01", "end": "2021-01-05"},
//!     {"id": 2, "name": "Review", "start": "2021-01-03", "end": "2021-01-04"},
//!     {"id": 3, "name": "Launch", "start": "2021-01-06", "end": "2021-01-06"}
//! ]"#).unwrap();
//!
//! let lanes = assign_lanes(&tasks).unwrap();
//! assert_eq!(lanes.ids(), vec![vec!["1", "3"], vec!["2"]]);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs"

pub mod config;
pub mod error;
pub mod lanes;
pub mod models;
pub mod normalize;
pub mod validation;
