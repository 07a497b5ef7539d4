//! # Function-backed executor (`ExecuteFn`)
//!
//! [`ExecuteFn`] wraps a closure `F: Fn(D) -> Fut`, producing a fresh future per
//! attempt. Shared state between attempts has to be captured explicitly
//! (e.g. an `Arc<...>` moved into the closure).
//!
//! ## Example
//! ```rust
//! use taskqueue::{ExecuteError, ExecuteFn, Outcome};
//!
//! let exec = ExecuteFn::new(|n: u32| async move {
//!     Ok::<_, ExecuteError>(Outcome::Success(n * 2))
//! });
//! # let _ = exec;
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ExecuteError;
use crate::tasks::{execute::Execute, outcome::Outcome};

/// Function-backed executor implementation.
#[derive(Debug, Clone)]
pub struct ExecuteFn<F> {
    f: F,
}

impl<F> ExecuteFn<F> {
    /// Creates a new function-backed executor.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the executor behind an `Arc`, for sharing across runs.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut, D, R> Execute<D, R> for ExecuteFn<F>
where
    F: Fn(D) -> Fut + Send + Sync, // Fn, not FnMut
    Fut: Future<Output = Result<Outcome<R>, ExecuteError>> + Send + 'static,
    D: Send + 'static,
    R: Send + 'static,
{
    async fn execute(&self, data: D) -> Result<Outcome<R>, ExecuteError> {
        (self.f)(data).await
    }
}

#[async_trait]
impl<D, R, E> Execute<D, R> for Arc<E>
where
    E: Execute<D, R> + ?Sized,
    D: Send + 'static,
    R: Send + 'static,
{
    async fn execute(&self, data: D) -> Result<Outcome<R>, ExecuteError> {
        self.as_ref().execute(data).await
    }
}
