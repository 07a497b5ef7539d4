//! # Executor abstraction.
//!
//! The [`Execute`] trait is the runner's only view of what a task does. It is
//! invoked once per attempt with a fresh copy of the task payload.

use async_trait::async_trait;

use crate::{error::ExecuteError, tasks::outcome::Outcome};

/// # Performs one attempt at a task.
///
/// Return:
/// - `Ok(Outcome::Success(r))` when the work is done,
/// - `Ok(Outcome::Fail)` when it failed and retrying cannot help,
/// - `Ok(Outcome::Retry)` when it failed transiently.
///
/// `Err(_)` and panics are treated as `Retry` by the runner.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use taskqueue::{Execute, ExecuteError, Outcome};
///
/// struct Upper;
///
/// #[async_trait]
/// impl Execute<String, String> for Upper {
///     async fn execute(&self, data: String) -> Result<Outcome<String>, ExecuteError> {
///         if data.is_empty() {
///             return Ok(Outcome::Fail);
///         }
///         Ok(Outcome::Success(data.to_uppercase()))
///     }
/// }
/// ```
#[async_trait]
pub trait Execute<D, R>: Send + Sync
where
    D: Send + 'static,
    R: Send + 'static,
{
    /// Runs one attempt with the given payload.
    async fn execute(&self, data: D) -> Result<Outcome<R>, ExecuteError>;
}
