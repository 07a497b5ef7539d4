//! # taskqueue
//!
//! **taskqueue** is a small sequential task runner for Rust.
//!
//! It executes a fixed batch of independent tasks one at a time, retries
//! transient failures up to a bound by sending them to the back of the queue,
//! and reports exactly one terminal outcome per task to a caller-supplied sink.
//! What a task does and how progress is shown are left to the caller.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  QueueTask   │   │  QueueTask   │   │  QueueTask   │
//!     │ (id + data)  │   │ (id + data)  │   │ (id + data)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Runner (one run at a time per call)                              │
//! │  - validate batch (non-empty, unique ids)                         │
//! │  - VecDeque queue (FIFO, retries appended at the tail)            │
//! │  - retry counters (HashMap<id, u32>, never reset within a run)    │
//! │  - RunReport (succeeded / failed in terminal order)               │
//! └──────┬───────────────────────────────────────────────┬────────────┘
//!        │ one attempt at a time                         │ terminal only
//!        ▼                                               ▼
//! ┌──────────────────────────┐              ┌──────────────────────────┐
//! │  Execute::execute(data)  │              │ OnProgress::on_progress  │
//! │  → Success(r)/Fail/Retry │              │   (id, TaskResult)       │
//! │  → Err / panic ≙ Retry   │              └──────────────────────────┘
//! └──────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! loop while queue non-empty {
//!   ├─► sleep(inter_task_delay ± jitter)   (skipped before the first attempt)
//!   ├─► task = queue.pop_front()
//!   ├─► execute(task.data)
//!   │       ├─ Success(r) ──► succeeded.push(id), on_progress(id, Success(r))
//!   │       ├─ Fail ────────► failed.push(id),    on_progress(id, Failed(Rejected))
//!   │       └─ Retry/Err ───► retries[id] < bound ? requeue at tail
//!   │                                            : failed.push(id), on_progress(id, Failed(Exhausted))
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Runner**        | Sequential FIFO execution with bounded tail-requeue.          | [`Runner`], [`RunReport`]                   |
//! | **Tasks**         | Identified work items and the executor seam.                  | [`QueueTask`], [`Execute`], [`ExecuteFn`]   |
//! | **Outcomes**      | Closed per-attempt and terminal result types.                 | [`Outcome`], [`TaskResult`], [`Failure`]    |
//! | **Progress**      | Per-task terminal notifications.                              | [`OnProgress`]                              |
//! | **Errors**        | Typed invocation and execution errors.                        | [`RunError`], [`ExecuteError`]              |
//! | **Configuration** | Retry bound, pause between attempts, jitter.                  | [`RunnerConfig`], [`JitterPolicy`]          |
//!
//! ## Optional features
//! - `logging`: exports a built-in [`LogProgress`] sink that writes outcomes through `tracing`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use taskqueue::{ExecuteError, ExecuteFn, Outcome, QueueTask, Runner, RunnerConfig, TaskResult};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = RunnerConfig::default()
//!         .with_retry_bound(2)
//!         .with_inter_task_delay(Duration::from_millis(10));
//!
//!     // Executor: one attempt per call.
//!     let exec = ExecuteFn::new(|name: String| async move {
//!         if name.is_empty() {
//!             return Ok::<_, ExecuteError>(Outcome::Fail);
//!         }
//!         Ok(Outcome::Success(name.len()))
//!     });
//!
//!     // Progress sink: any FnMut(&str, TaskResult<R>).
//!     let mut progress = |id: &str, result: TaskResult<usize>| {
//!         println!("{id}: success={}", result.is_success());
//!     };
//!
//!     let tasks = vec![
//!         QueueTask::new("first", "alpha".to_string()),
//!         QueueTask::new("second", String::new()),
//!     ];
//!
//!     let report = Runner::new(cfg).run(tasks, &exec, &mut progress).await?;
//!     assert_eq!(report.succeeded(), ["first"]);
//!     assert_eq!(report.failed(), ["second"]);
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod policies;
mod progress;
mod tasks;

// ---- Public re-exports ----

pub use crate::core::{DEFAULT_INTER_TASK_DELAY, DEFAULT_RETRY_BOUND, RunReport, Runner, RunnerConfig};
pub use error::{ExecuteError, RunError};
pub use policies::JitterPolicy;
pub use progress::OnProgress;
pub use tasks::{Execute, ExecuteFn, Failure, Outcome, QueueTask, TaskResult};

// Optional: expose a built-in tracing sink.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use progress::LogProgress;
