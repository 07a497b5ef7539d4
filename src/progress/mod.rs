//! # Progress sinks.
//!
//! This module provides the [`OnProgress`] trait, the runner's only channel for
//! reporting per-task results while a run is in progress.
//!
//! ## Delivery rules
//! ```text
//! Runner ── terminal outcome ──► OnProgress::on_progress(id, TaskResult)
//!    │
//!    └── Retry / abnormal attempt with retries left ──► (nothing delivered)
//! ```
//!
//! - Called **exactly once** per task, in the order tasks become terminal.
//! - Called synchronously from the run loop; keep it cheap.
//! - Any `FnMut(&str, TaskResult<R>)` closure is a sink.

mod sink;

#[cfg(feature = "logging")]
mod log;

pub use sink::OnProgress;

#[cfg(feature = "logging")]
pub use log::LogProgress;
