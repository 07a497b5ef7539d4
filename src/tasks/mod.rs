//! # Tasks, executors and outcomes.
//!
//! This module provides the task-related types:
//! - [`QueueTask`] - one identified unit of work with an opaque payload
//! - [`Execute`] - trait for performing one attempt at a task
//! - [`ExecuteFn`] - closure-backed executor
//! - [`Outcome`] - tri-state result of one attempt
//! - [`TaskResult`], [`Failure`] - terminal outcome delivered to the progress sink

mod execute;
mod execute_fn;
mod outcome;
mod task;

pub use execute::Execute;
pub use execute_fn::ExecuteFn;
pub use outcome::{Failure, Outcome, TaskResult};
pub use task::QueueTask;
