//! Runtime core: the run loop and its configuration.
//!
//! The public API from this module is [`Runner`], [`RunnerConfig`] and [`RunReport`].
//!
//! Internal modules:
//! - [`attempt`]: executes one attempt, turning executor panics into errors;
//! - [`runner`]: drains the queue with FIFO order and bounded tail-requeue;
//! - [`config`]: retry bound, inter-task delay and jitter;
//! - [`report`]: terminal-order summary returned by a run.

mod attempt;
mod config;
mod report;
mod runner;

pub use config::{DEFAULT_INTER_TASK_DELAY, DEFAULT_RETRY_BOUND, RunnerConfig};
pub use report::RunReport;
pub use runner::Runner;
