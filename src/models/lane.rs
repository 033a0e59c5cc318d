//! Lane assignment output.
//!
//! A [`LaneSet`] is an ordered list of [`Lane`]s, each an ordered list of
//! references into the caller's task slice. Lane 0 is the first lane opened
//! during assignment; tasks inside a lane are in start order.

use serde::Serialize;

use super::Interval;

/// One visual row of mutually non-overlapping tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane<'a, T> {
    index: usize,
    /// Tasks placed in this lane, by start time.
    pub tasks: Vec<&'a T>,
}

impl<'a, T> Lane<'a, T> {
    /// Creates an empty lane at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            tasks: Vec::new(),
        }
    }

    /// Position of this lane in its set (0-indexed).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Appends a task.
    pub fn push(&mut self, task: &'a T) {
        self.tasks.push(task);
    }

    /// Number of tasks in this lane.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether this lane holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the lane's tasks in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.tasks.iter().copied()
    }
}

impl<T: Interval> Lane<'_, T> {
    /// IDs of the lane's tasks, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id()).collect()
    }
}

/// The ordered lanes produced by one assignment run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LaneSet<'a, T> {
    lanes: Vec<Lane<'a, T>>,
}

impl<'a, T> LaneSet<'a, T> {
    /// Wraps already-built lanes, numbering them by position.
    pub fn new(mut lanes: Vec<Lane<'a, T>>) -> Self {
        for (index, lane) in lanes.iter_mut().enumerate() {
            lane.index = index;
        }
        Self { lanes }
    }

    /// Creates a set with no lanes.
    pub fn empty() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Whether no lanes were produced.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// The lanes, in order.
    pub fn lanes(&self) -> &[Lane<'a, T>] {
        &self.lanes
    }

    /// Lane at `index`.
    pub fn get(&self, index: usize) -> Option<&Lane<'a, T>> {
        self.lanes.get(index)
    }

    /// Iterates over the lanes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Lane<'a, T>> {
        self.lanes.iter()
    }

    /// Total number of tasks across all lanes.
    pub fn task_count(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    /// Consumes the set, returning the lanes.
    pub fn into_lanes(self) -> Vec<Lane<'a, T>> {
        self.lanes
    }
}

impl<T: Interval> LaneSet<'_, T> {
    /// Index of the lane holding the task with `id`.
    pub fn lane_of(&self, id: &str) -> Option<usize> {
        self.lanes
            .iter()
            .position(|lane| lane.tasks.iter().any(|t| t.id() == id))
    }

    /// Task IDs grouped by lane.
    pub fn ids(&self) -> Vec<Vec<&str>> {
        self.lanes.iter().map(Lane::ids).collect()
    }
}

impl<'s, 'a, T> IntoIterator for &'s LaneSet<'a, T> {
    type Item = &'s Lane<'a, T>;
    type IntoIter = std::slice::Iter<'s, Lane<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}
