//! Error types used by the task runner and executors.
//!
//! This module defines two main error enums:
//!
//! - [`RunError`]: invocation errors raised by [`Runner::run`](crate::Runner::run) before any task executes.
//! - [`ExecuteError`]: abnormal results of a single executor attempt.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

/// # Errors produced when submitting a batch.
///
/// These are programming errors on the caller side, not transient conditions.
/// A batch that triggers one of them is rejected as a whole: no executor call,
/// no progress notification.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The submitted batch contained no tasks.
    #[error("cannot enqueue empty task list")]
    EmptyBatch,

    /// Two or more tasks share the same identifier.
    #[error("all task identifiers must be unique; duplicated: {duplicates:?}")]
    DuplicateIds {
        /// Identifiers that occur more than once, in order of first repetition.
        duplicates: Vec<String>,
    },
}

impl RunError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskqueue::RunError;
    ///
    /// assert_eq!(RunError::EmptyBatch.as_label(), "run_empty_batch");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RunError::EmptyBatch => "run_empty_batch",
            RunError::DuplicateIds { .. } => "run_duplicate_ids",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RunError::EmptyBatch => "empty batch".to_string(),
            RunError::DuplicateIds { duplicates } => {
                format!("duplicate ids={duplicates:?}")
            }
        }
    }
}

/// # Abnormal result of one executor attempt.
///
/// Returned by an [`Execute`](crate::Execute) implementation instead of an
/// [`Outcome`](crate::Outcome), or produced by the runner when the executor
/// panics. The runner routes both exactly like [`Outcome::Retry`](crate::Outcome::Retry).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecuteError {
    /// Executor returned an error.
    #[error("execution failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// Executor panicked while the attempt was being awaited.
    #[error("executor panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl ExecuteError {
    /// Convenience constructor for [`ExecuteError::Failed`] from anything printable.
    ///
    /// # Example
    /// ```
    /// use taskqueue::ExecuteError;
    ///
    /// let err = ExecuteError::failed("connection reset");
    /// assert_eq!(err.to_string(), "execution failed: connection reset");
    /// ```
    pub fn failed(error: impl std::fmt::Display) -> Self {
        ExecuteError::Failed {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ExecuteError::Failed { .. } => "execute_failed",
            ExecuteError::Panicked { .. } => "execute_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ExecuteError::Failed { error } => format!("error: {error}"),
            ExecuteError::Panicked { info } => format!("panic: {info}"),
        }
    }

    /// Indicates whether the runner may attempt the task again after this error.
    ///
    /// Every abnormal executor result is transient from the runner's point of view;
    /// whether another attempt actually happens depends on the retry bound.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExecuteError::Failed { .. } | ExecuteError::Panicked { .. }
        )
    }
}
