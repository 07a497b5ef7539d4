//! # Progress sink trait.

use crate::tasks::TaskResult;

/// Receives the terminal outcome of each task.
///
/// The runner borrows the sink mutably for the duration of one run, so a sink
/// may accumulate state without interior mutability.
///
/// ## Example
/// ```rust
/// use taskqueue::{OnProgress, TaskResult};
///
/// #[derive(Default)]
/// struct Counter {
///     ok: usize,
///     failed: usize,
/// }
///
/// impl OnProgress<String> for Counter {
///     fn on_progress(&mut self, _id: &str, result: TaskResult<String>) {
///         match result {
///             TaskResult::Success(_) => self.ok += 1,
///             TaskResult::Failed(_) => self.failed += 1,
///         }
///     }
/// }
/// ```
pub trait OnProgress<R> {
    /// Handles the terminal outcome of task `id`.
    fn on_progress(&mut self, id: &str, result: TaskResult<R>);
}

impl<R, F> OnProgress<R> for F
where
    F: FnMut(&str, TaskResult<R>),
{
    fn on_progress(&mut self, id: &str, result: TaskResult<R>) {
        (*self)(id, result)
    }
}
