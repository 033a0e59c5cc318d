//! Timeline domain models.
//!
//! Input records ([`Task`], or anything implementing [`Interval`]) and
//! lane assignment output ([`Lane`], [`LaneSet`]).
//!
//! # Concepts
//!
//! | Type | Meaning |
//! |------|---------|
//! | Task | A named span of calendar days |
//! | Lane | A row of mutually non-overlapping tasks |
//! | LaneSet | All lanes for one assignment run |
//! | TimelineRange | Earliest start to latest end of a task set |

mod lane;
mod range;
mod task;

pub use lane::{Lane, LaneSet};
pub use range::TimelineRange;
pub use task::{resolve_spans, Interval, Task};

pub(crate) use task::check_axis;
