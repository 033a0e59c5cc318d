//! Input validation for timeline tasks.
//!
//! Checks task records before lane assignment. Detects:
//! - Duplicate IDs
//! - Empty IDs
//! - Missing or non-comparable bounds
//! - Inverted intervals (start after end)
//!
//! Unlike the lane assigner, which stops at the first unusable task, this
//! reports every problem found so callers can fix their input in one pass.

use std::collections::HashSet;

use crate::error::LaneError;
use crate::models::{check_axis, Interval};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// ID of the offending task.
    pub task_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has an empty ID.
    EmptyId,
    /// A task lacks a start or end.
    MissingBound,
    /// A task bound cannot be compared.
    IncomparableBound,
    /// A task starts after it ends.
    InvertedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, task_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            task_id: task_id.to_string(),
            message: message.into(),
        }
    }
}

impl From<LaneError> for ValidationError {
    fn from(err: LaneError) -> Self {
        let kind = match &err {
            LaneError::MissingBound { .. } => ValidationErrorKind::MissingBound,
            LaneError::IncomparableBound { .. } => ValidationErrorKind::IncomparableBound,
            LaneError::InvertedInterval { .. } => ValidationErrorKind::InvertedInterval,
        };
        let id = match &err {
            LaneError::MissingBound { id, .. }
            | LaneError::IncomparableBound { id, .. }
            | LaneError::InvertedInterval { id } => id.clone(),
        };
        Self {
            kind,
            task_id: id,
            message: err.to_string(),
        }
    }
}

/// Validates a task set.
///
/// Checks:
/// 1. Every task has a non-empty ID
/// 2. No two tasks share an ID
/// 3. Both bounds are present and comparable, with each other and with
///    the other tasks' bounds
/// 4. No task starts after it ends
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks<T: Interval>(tasks: &[T]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut axis = None;

    for task in tasks {
        let id = task.id();

        if id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                id,
                "Task has an empty ID",
            ));
        } else if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                id,
                format!("Duplicate task ID: {id}"),
            ));
        }

        let (start, end) = match task.span() {
            Ok(span) => span,
            Err(err) => {
                errors.push(err.into());
                continue;
            }
        };
        let origin = *axis.get_or_insert(start);
        if let Err(err) = check_axis(id, (start, end), origin) {
            errors.push(err.into());
        } else if start > end {
            errors.push(ValidationError::from(LaneError::InvertedInterval {
                id: id.to_string(),
            }));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
