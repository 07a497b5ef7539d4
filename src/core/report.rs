//! # Run report.
//!
//! [`RunReport`] is the aggregate result of one run. Identifiers are recorded in
//! the order tasks became terminal, which equals submission order only when no
//! task was requeued.

/// Final summary of a run.
///
/// Every submitted identifier appears exactly once, in exactly one of
/// [`succeeded`](Self::succeeded) and [`failed`](Self::failed).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    succeeded: Vec<String>,
    failed: Vec<String>,
    attempts: u64,
}

impl RunReport {
    pub(crate) fn with_capacity(tasks: usize) -> Self {
        Self {
            succeeded: Vec::with_capacity(tasks),
            failed: Vec::new(),
            attempts: 0,
        }
    }

    pub(crate) fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    pub(crate) fn record_success(&mut self, id: String) {
        self.succeeded.push(id);
    }

    pub(crate) fn record_failure(&mut self, id: String) {
        self.failed.push(id);
    }

    /// Identifiers of tasks that succeeded, in completion order.
    pub fn succeeded(&self) -> &[String] {
        &self.succeeded
    }

    /// Identifiers of tasks declared failed, in the order they failed.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Total executor invocations across the run, retries included.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Number of tasks that reached a terminal state.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Returns `true` when no task failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Consumes the report, returning `(succeeded, failed)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.succeeded, self.failed)
    }
}
