//! # Example: import_batch
//!
//! Imports a batch of feature flags through a flaky upstream API, one request
//! at a time, with bounded retries and a pause between requests.
//!
//! Demonstrates how to:
//! - Define an executor with [`ExecuteFn`] that maps API responses to [`Outcome`]s.
//! - Report terminal outcomes with the built-in [`LogProgress`] sink.
//! - Read the [`RunReport`](taskqueue::RunReport) once the batch is drained.
//!
//! ## Flow
//! ```text
//! Runner::run()
//!   ├─► checkout       → Success
//!   ├─► dark-mode      → Retry (429)  ── requeued at tail
//!   ├─► legacy-banner  → Fail (400)   ── reported failed, never retried
//!   ├─► new-search     → Err(timeout) ── requeued at tail
//!   ├─► dark-mode      → Success
//!   └─► new-search     → Success
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example import_batch --features logging
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use taskqueue::{
    ExecuteError, ExecuteFn, JitterPolicy, LogProgress, Outcome, QueueTask, Runner, RunnerConfig,
};
use tracing_subscriber::EnvFilter;

/// Payload sent to the upstream API.
#[derive(Clone, Debug)]
struct FlagDraft {
    key: &'static str,
    /// Simulated upstream responses, one per request.
    responses: Vec<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 1. Configure: two retries, ~100ms between requests
    let cfg = RunnerConfig::default()
        .with_retry_bound(2)
        .with_inter_task_delay(Duration::from_millis(100))
        .with_jitter(JitterPolicy::Equal);

    // 2. Executor: map fake HTTP status codes to outcomes
    let calls: Arc<Mutex<HashMap<&'static str, usize>>> = Arc::default();
    let exec = ExecuteFn::new(move |draft: FlagDraft| {
        let calls = Arc::clone(&calls);
        async move {
            let n = {
                let mut calls = calls.lock().unwrap_or_else(PoisonError::into_inner);
                let n = calls.entry(draft.key).or_insert(0);
                *n += 1;
                *n
            };
            let status = draft.responses[(n - 1).min(draft.responses.len() - 1)];
            match status {
                200..=299 => Ok(Outcome::Success(format!("{} created", draft.key))),
                429 | 500..=599 => Ok(Outcome::Retry),
                408 => Err(ExecuteError::failed("request timed out")),
                _ => Ok(Outcome::Fail),
            }
        }
    });

    // 3. Build the batch
    let tasks = vec![
        QueueTask::new("checkout", FlagDraft { key: "checkout", responses: vec![201] }),
        QueueTask::new("dark-mode", FlagDraft { key: "dark-mode", responses: vec![429, 201] }),
        QueueTask::new("legacy-banner", FlagDraft { key: "legacy-banner", responses: vec![400] }),
        QueueTask::new("new-search", FlagDraft { key: "new-search", responses: vec![408, 201] }),
    ];

    // 4. Run until every flag is terminal
    let report = Runner::new(cfg).run(tasks, &exec, &mut LogProgress::new()).await?;

    println!("[main] imported: {:?}", report.succeeded());
    println!("[main] failed:   {:?}", report.failed());
    println!("[main] requests: {}", report.attempts());
    Ok(())
}
