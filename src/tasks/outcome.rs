//! # Attempt and terminal outcomes.
//!
//! Two closed enums describe what happened to a task:
//!
//! - [`Outcome`] is what an executor returns for **one attempt**. The runner
//!   routes it and never retains it.
//! - [`TaskResult`] is what the progress sink receives **once per task**, when
//!   the task can no longer be attempted.
//!
//! ```text
//! Outcome::Success(r) ───────────────────────────► TaskResult::Success(r)
//! Outcome::Fail ─────────────────────────────────► TaskResult::Failed(Failure::Rejected)
//! Outcome::Retry / Err(ExecuteError) ─┬─ retries left ─► requeue (no notification)
//!                                     └─ exhausted ────► TaskResult::Failed(Failure::Exhausted)
//! ```

use crate::error::ExecuteError;

/// Result of one executor invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<R> {
    /// The attempt succeeded and produced `R`.
    Success(R),
    /// The attempt failed and must not be retried.
    Fail,
    /// The attempt failed transiently; the task may be attempted again.
    Retry,
}

impl<R> Outcome<R> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::Fail => "fail",
            Outcome::Retry => "retry",
        }
    }
}

/// Terminal outcome of a task, delivered to the progress sink exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskResult<R> {
    /// The task succeeded with the executor's result data.
    Success(R),
    /// The task was declared failed.
    Failed(Failure),
}

impl<R> TaskResult<R> {
    /// Returns `true` for [`TaskResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, TaskResult::Success(_))
    }

    /// Returns the success payload, if any.
    pub fn success(self) -> Option<R> {
        match self {
            TaskResult::Success(r) => Some(r),
            TaskResult::Failed(_) => None,
        }
    }

    /// Returns the failure detail, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            TaskResult::Success(_) => None,
            TaskResult::Failed(f) => Some(f),
        }
    }
}

/// Why a task ended in the failed list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The executor returned [`Outcome::Fail`].
    Rejected {
        /// Executor invocations spent on the task, including the final one.
        attempts: u32,
    },
    /// The task asked to be retried after its retry budget was used up.
    Exhausted {
        /// Executor invocations spent on the task (`retry_bound + 1`).
        attempts: u32,
        /// Error of the last attempt, when it ended abnormally rather than with `Retry`.
        last_error: Option<ExecuteError>,
    },
}

impl Failure {
    /// Returns the number of executor invocations spent on the task.
    pub fn attempts(&self) -> u32 {
        match self {
            Failure::Rejected { attempts } | Failure::Exhausted { attempts, .. } => *attempts,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Failure::Rejected { .. } => "task_rejected",
            Failure::Exhausted { .. } => "task_exhausted",
        }
    }
}
