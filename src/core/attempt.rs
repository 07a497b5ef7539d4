//! # Run a single attempt of a task.
//!
//! Executes one attempt through the [`Execute`] collaborator and normalizes its result.
//!
//! ## Result mapping
//!
//! ```text
//! execute(data) → Ok(outcome)       → Ok(outcome)
//! execute(data) → Err(ExecuteError) → Err(ExecuteError)
//! execute(data) panics              → Err(ExecuteError::Panicked { info })
//! ```
//!
//! ## Rules
//! - The executor future is the only await point of an attempt
//! - Panics are caught with `catch_unwind` and never unwind into the run loop
//! - The payload is moved into the executor; the caller keeps its own copy for requeue

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::{
    error::ExecuteError,
    tasks::{Execute, Outcome},
};

/// Executes a single attempt of task `id` with payload `data`.
///
/// `attempt` is 1-based and only used for logging.
///
/// **Warning**: `AssertUnwindSafe` is used, so an executor that panics while holding
/// a lock on shared state may leave that state inconsistent for later attempts.
pub(crate) async fn run_once<D, R, E>(
    executor: &E,
    id: &str,
    data: D,
    attempt: u32,
) -> Result<Outcome<R>, ExecuteError>
where
    E: Execute<D, R> + ?Sized,
    D: Send + 'static,
    R: Send + 'static,
{
    debug!(task = id, attempt, "attempt starting");

    let fut = async move { executor.execute(data).await };
    let res = match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(r) => r,
        Err(panic_err) => Err(ExecuteError::Panicked {
            info: panic_message(&*panic_err),
        }),
    };

    match &res {
        Ok(outcome) => {
            debug!(task = id, attempt, outcome = outcome.as_label(), "attempt finished");
        }
        Err(e) => {
            warn!(task = id, attempt, error = %e, kind = e.as_label(), "attempt ended abnormally");
        }
    }
    res
}

/// Renders a panic payload as text.
fn panic_message(any: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
