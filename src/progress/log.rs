//! # LogProgress: tracing-backed progress sink
//!
//! A minimal sink that writes every terminal outcome through `tracing`.
//! Use it for demos, or as a stand-in while wiring a real sink.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! INFO taskqueue::progress::log: task succeeded task="flag-a" result=Created(12)
//! WARN taskqueue::progress::log: task failed task="flag-b" reason="task_rejected" attempts=1
//! WARN taskqueue::progress::log: task failed task="flag-c" reason="task_exhausted" attempts=3 error=Some(..)
//! ```

use std::fmt::Debug;

use tracing::{info, warn};

use crate::progress::OnProgress;
use crate::tasks::{Failure, TaskResult};

/// Progress sink that logs terminal outcomes.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogProgress;

impl LogProgress {
    /// Construct a new [`LogProgress`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<R: Debug> OnProgress<R> for LogProgress {
    fn on_progress(&mut self, id: &str, result: TaskResult<R>) {
        match result {
            TaskResult::Success(r) => {
                info!(task = id, result = ?r, "task succeeded");
            }
            TaskResult::Failed(failure @ Failure::Rejected { .. }) => {
                warn!(
                    task = id,
                    reason = failure.as_label(),
                    attempts = failure.attempts(),
                    "task failed"
                );
            }
            TaskResult::Failed(Failure::Exhausted {
                attempts,
                last_error,
            }) => {
                warn!(
                    task = id,
                    reason = "task_exhausted",
                    attempts,
                    error = ?last_error,
                    "task failed"
                );
            }
        }
    }
}
