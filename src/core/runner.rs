//! # Runner: sequential FIFO execution with bounded tail-requeue.
//!
//! Drains a fixed batch of [`QueueTask`]s one attempt at a time.
//!
//! ## Architecture
//! ```text
//! Runner::run(tasks, executor, progress)
//!
//! validate(batch) ──► Err(RunError) (nothing executed, nothing reported)
//!       │
//!       ▼
//! loop while queue non-empty {
//!   ├─► pause (every attempt but the first; see RunnerConfig::pause)
//!   ├─► pop head
//!   ├─► run_once(executor, payload) ─────► execute(data)
//!   │       │
//!   │       ├─ Success(r) ─► succeeded += id; progress(id, Success(r))
//!   │       ├─ Fail       ─► failed += id;    progress(id, Failed(Rejected))
//!   │       └─ Retry / Err / panic:
//!   │            ├─ retries[id] >= bound ─► failed += id; progress(id, Failed(Exhausted))
//!   │            └─ otherwise            ─► retries[id] += 1; push to tail
//! }
//! return RunReport
//! ```
//!
//! ## Rules
//! - Exactly **one** executor invocation is in flight at any time
//! - Requeued tasks go to the **tail**, behind every task already queued
//! - Retry counters are created lazily and **never reset** during a run
//! - Progress is reported **once** per task and never for non-terminal attempts
//! - Once validation passes, `run` always completes with a full report

use std::collections::{HashMap, HashSet, VecDeque};

use tokio::time;
use tracing::{info, trace, warn};

use crate::{
    core::{attempt::run_once, config::RunnerConfig, report::RunReport},
    error::RunError,
    progress::OnProgress,
    tasks::{Execute, Failure, Outcome, QueueTask, TaskResult},
};

/// Sequential retrying task runner.
///
/// A runner holds only configuration; all per-run state (queue, retry counters,
/// result lists) lives inside [`Runner::run`] and is dropped when it returns.
/// The same runner can be used for any number of runs.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use taskqueue::{ExecuteError, ExecuteFn, Outcome, QueueTask, Runner, RunnerConfig, TaskResult};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let runner = Runner::new(RunnerConfig::default().with_inter_task_delay(Duration::ZERO));
///
///     let exec = ExecuteFn::new(|n: u32| async move {
///         if n % 2 == 0 {
///             Ok::<_, ExecuteError>(Outcome::Success(n / 2))
///         } else {
///             Ok(Outcome::Fail)
///         }
///     });
///
///     let mut done = Vec::new();
///     let report = runner
///         .run(
///             vec![QueueTask::new("a", 4u32), QueueTask::new("b", 3u32)],
///             &exec,
///             &mut |id: &str, r: TaskResult<u32>| done.push((id.to_string(), r.is_success())),
///         )
///         .await?;
///
///     assert_eq!(report.succeeded(), ["a"]);
///     assert_eq!(report.failed(), ["b"]);
///     assert_eq!(done, vec![("a".to_string(), true), ("b".to_string(), false)]);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Creates a runner with the given configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Returns the runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs every task in `tasks` to a terminal state.
    ///
    /// ### Validation
    /// Fails immediately, before any executor or progress call, when:
    /// - the batch is empty ([`RunError::EmptyBatch`]);
    /// - two tasks share an identifier ([`RunError::DuplicateIds`]).
    ///
    /// ### Ownership
    /// The batch is moved into a private queue; `executor` and `progress` are only
    /// borrowed for the duration of the call.
    ///
    /// ### Cancellation
    /// None. If the executor never resolves, the run never completes; wrap the
    /// executor (e.g. with `tokio::time::timeout`) when that matters.
    pub async fn run<D, R, E, P>(
        &self,
        tasks: impl IntoIterator<Item = QueueTask<D>>,
        executor: &E,
        progress: &mut P,
    ) -> Result<RunReport, RunError>
    where
        D: Clone + Send + 'static,
        R: Send + 'static,
        E: Execute<D, R> + ?Sized,
        P: OnProgress<R> + ?Sized,
    {
        let mut queue: VecDeque<QueueTask<D>> = tasks.into_iter().collect();
        validate(&queue)?;

        let bound = self.config.retry_bound;
        info!(tasks = queue.len(), retry_bound = bound, "run starting");

        let mut retries: HashMap<String, u32> = HashMap::new();
        let mut report = RunReport::with_capacity(queue.len());

        while let Some(task) = queue.pop_front() {
            if report.attempts() > 0 {
                if let Some(pause) = self.config.pause() {
                    trace!(delay_ms = pause.as_millis() as u64, "pausing before next attempt");
                    time::sleep(pause).await;
                }
            }

            let used = retries.get(task.id()).copied().unwrap_or(0);
            let attempt = used + 1;
            report.record_attempt();

            let res = run_once(executor, task.id(), task.data().clone(), attempt).await;

            let last_error = match res {
                Ok(Outcome::Success(r)) => {
                    progress.on_progress(task.id(), TaskResult::Success(r));
                    report.record_success(task.into_parts().0);
                    continue;
                }
                Ok(Outcome::Fail) => {
                    warn!(task = task.id(), attempts = attempt, "task rejected");
                    progress.on_progress(
                        task.id(),
                        TaskResult::Failed(Failure::Rejected { attempts: attempt }),
                    );
                    report.record_failure(task.into_parts().0);
                    continue;
                }
                Ok(Outcome::Retry) => None,
                Err(e) => Some(e),
            };

            if used >= bound {
                warn!(task = task.id(), attempts = attempt, "retries exhausted");
                progress.on_progress(
                    task.id(),
                    TaskResult::Failed(Failure::Exhausted {
                        attempts: attempt,
                        last_error,
                    }),
                );
                report.record_failure(task.into_parts().0);
            } else {
                retries.insert(task.id().to_string(), used + 1);
                warn!(
                    task = task.id(),
                    retry = used + 1,
                    retry_bound = bound,
                    "retry scheduled"
                );
                queue.push_back(task);
            }
        }

        info!(
            succeeded = report.succeeded().len(),
            failed = report.failed().len(),
            attempts = report.attempts(),
            "run finished"
        );
        Ok(report)
    }
}

/// Checks that the batch is non-empty and that identifiers are pairwise distinct.
fn validate<D>(queue: &VecDeque<QueueTask<D>>) -> Result<(), RunError> {
    if queue.is_empty() {
        return Err(RunError::EmptyBatch);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(queue.len());
    let mut duplicates: Vec<String> = Vec::new();
    for task in queue {
        if !seen.insert(task.id()) && !duplicates.iter().any(|d| d == task.id()) {
            duplicates.push(task.id().to_string());
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(RunError::DuplicateIds { duplicates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tokio::time::Instant;

    use crate::error::ExecuteError;
    use crate::tasks::ExecuteFn;

    /// Payload describing how the test executor should behave on each attempt.
    #[derive(Clone, Debug)]
    struct Script {
        id: &'static str,
        /// Outcomes returned on attempts 1, 2, ...; the last one repeats.
        plan: Vec<Step>,
    }

    #[derive(Clone, Copy, Debug)]
    enum Step {
        Ok,
        Fail,
        Retry,
        Error,
        Panic,
    }

    fn task(id: &'static str, plan: Vec<Step>) -> QueueTask<Script> {
        QueueTask::new(id, Script { id, plan })
    }

    /// Executor that follows each task's script and records every invocation.
    fn scripted(log: Arc<Mutex<Vec<String>>>) -> impl Execute<Script, String> {
        ExecuteFn::new(move |s: Script| {
            let log = Arc::clone(&log);
            async move {
                let n = {
                    let mut log = log.lock().unwrap();
                    log.push(s.id.to_string());
                    log.iter().filter(|x| x.as_str() == s.id).count()
                };
                let step = s.plan[(n - 1).min(s.plan.len() - 1)];
                match step {
                    Step::Ok => Ok(Outcome::Success(format!("{}#{n}", s.id))),
                    Step::Fail => Ok(Outcome::Fail),
                    Step::Retry => Ok(Outcome::Retry),
                    Step::Error => Err(ExecuteError::failed("connection reset")),
                    Step::Panic => panic!("executor panicked on {}", s.id),
                }
            }
        })
    }

    fn fast(bound: u32) -> Runner {
        Runner::new(
            RunnerConfig::default()
                .with_retry_bound(bound)
                .with_inter_task_delay(Duration::ZERO),
        )
    }

    type Seen = Vec<(String, TaskResult<String>)>;

    async fn run_collect(
        runner: &Runner,
        tasks: Vec<QueueTask<Script>>,
    ) -> (Result<RunReport, RunError>, Vec<String>, Seen) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let exec = scripted(Arc::clone(&log));
        let mut seen: Seen = Vec::new();
        let res = runner
            .run(tasks, &exec, &mut |id: &str, r: TaskResult<String>| {
                seen.push((id.to_string(), r))
            })
            .await;
        let calls = log.lock().unwrap().clone();
        (res, calls, seen)
    }

    #[tokio::test]
    async fn test_empty_batch_rejected() {
        let (res, calls, seen) = run_collect(&fast(2), Vec::new()).await;
        assert_eq!(res, Err(RunError::EmptyBatch));
        assert!(calls.is_empty());
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected_before_execution() {
        let tasks = vec![
            task("a", vec![Step::Ok]),
            task("b", vec![Step::Ok]),
            task("a", vec![Step::Ok]),
            task("a", vec![Step::Ok]),
        ];
        let (res, calls, seen) = run_collect(&fast(2), tasks).await;
        assert_eq!(
            res,
            Err(RunError::DuplicateIds {
                duplicates: vec!["a".to_string()]
            })
        );
        assert!(calls.is_empty());
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn test_all_success_keeps_input_order() {
        let tasks = vec![
            task("a", vec![Step::Ok]),
            task("b", vec![Step::Ok]),
            task("c", vec![Step::Ok]),
        ];
        let (res, calls, seen) = run_collect(&fast(2), tasks).await;
        let report = res.unwrap();

        assert_eq!(report.succeeded(), ["a", "b", "c"]);
        assert!(report.failed().is_empty());
        assert!(report.is_clean());
        assert_eq!(report.attempts(), 3);
        assert_eq!(calls, ["a", "b", "c"]);
        assert_eq!(
            seen,
            vec![
                ("a".to_string(), TaskResult::Success("a#1".to_string())),
                ("b".to_string(), TaskResult::Success("b#1".to_string())),
                ("c".to_string(), TaskResult::Success("c#1".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_retry_goes_to_tail() {
        let tasks = vec![
            task("a", vec![Step::Retry, Step::Ok]),
            task("b", vec![Step::Ok]),
        ];
        let (res, calls, seen) = run_collect(&fast(2), tasks).await;
        let report = res.unwrap();

        assert_eq!(calls, ["a", "b", "a"]);
        assert_eq!(report.succeeded(), ["b", "a"]);
        assert_eq!(seen[1], ("a".to_string(), TaskResult::Success("a#2".to_string())));
    }

    #[tokio::test]
    async fn test_requeue_orders_behind_pending_retries() {
        let tasks = vec![
            task("a", vec![Step::Retry, Step::Ok]),
            task("b", vec![Step::Retry, Step::Ok]),
            task("c", vec![Step::Ok]),
        ];
        let (res, calls, _) = run_collect(&fast(2), tasks).await;
        assert_eq!(calls, ["a", "b", "c", "a", "b"]);
        assert_eq!(res.unwrap().succeeded(), ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_retry_bound_limits_attempts() {
        for bound in [0u32, 1, 2, 5] {
            let (res, calls, seen) =
                run_collect(&fast(bound), vec![task("a", vec![Step::Retry])]).await;
            let report = res.unwrap();

            assert_eq!(calls.len() as u32, bound + 1, "bound {bound}");
            assert_eq!(report.failed(), ["a"]);
            assert_eq!(report.attempts(), u64::from(bound + 1));
            assert_eq!(
                seen,
                vec![(
                    "a".to_string(),
                    TaskResult::Failed(Failure::Exhausted {
                        attempts: bound + 1,
                        last_error: None,
                    })
                )]
            );
        }
    }

    #[tokio::test]
    async fn test_single_attempt_mode() {
        let tasks = vec![task("a", vec![Step::Retry, Step::Ok])];
        let (res, calls, seen) = run_collect(&fast(0), tasks).await;
        assert_eq!(calls, ["a"]);
        assert_eq!(res.unwrap().failed(), ["a"]);
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].1.is_success());
    }

    #[tokio::test]
    async fn test_fail_is_not_retried() {
        let tasks = vec![task("a", vec![Step::Fail, Step::Ok]), task("b", vec![Step::Ok])];
        let (res, calls, seen) = run_collect(&fast(2), tasks).await;
        let report = res.unwrap();

        assert_eq!(calls, ["a", "b"]);
        assert_eq!(report.failed(), ["a"]);
        assert_eq!(report.succeeded(), ["b"]);
        assert_eq!(
            seen[0],
            ("a".to_string(), TaskResult::Failed(Failure::Rejected { attempts: 1 }))
        );
    }

    #[tokio::test]
    async fn test_executor_error_is_retried() {
        let tasks = vec![task("a", vec![Step::Error, Step::Ok])];
        let (res, calls, seen) = run_collect(&fast(2), tasks).await;

        assert_eq!(calls, ["a", "a"]);
        assert_eq!(res.unwrap().succeeded(), ["a"]);
        assert_eq!(seen, vec![("a".to_string(), TaskResult::Success("a#2".to_string()))]);
    }

    #[tokio::test]
    async fn test_executor_panic_is_retried() {
        let tasks = vec![task("a", vec![Step::Panic, Step::Ok]), task("b", vec![Step::Ok])];
        let (res, calls, _) = run_collect(&fast(2), tasks).await;

        assert_eq!(calls, ["a", "b", "a"]);
        assert_eq!(res.unwrap().succeeded(), ["b", "a"]);
    }

    #[tokio::test]
    async fn test_exhausted_error_is_reported() {
        let (res, _, seen) = run_collect(&fast(1), vec![task("a", vec![Step::Error])]).await;
        assert_eq!(res.unwrap().failed(), ["a"]);
        assert_eq!(
            seen,
            vec![(
                "a".to_string(),
                TaskResult::Failed(Failure::Exhausted {
                    attempts: 2,
                    last_error: Some(ExecuteError::failed("connection reset")),
                })
            )]
        );
    }

    #[tokio::test]
    async fn test_every_id_terminal_exactly_once() {
        let tasks = vec![
            task("ok", vec![Step::Ok]),
            task("fail", vec![Step::Fail]),
            task("flaky", vec![Step::Retry, Step::Error, Step::Ok]),
            task("dead", vec![Step::Retry]),
            task("boom", vec![Step::Panic]),
        ];
        let ids = ["ok", "fail", "flaky", "dead", "boom"];
        let (res, _, seen) = run_collect(&fast(2), tasks).await;
        let report = res.unwrap();

        assert_eq!(report.total(), ids.len());
        for id in &ids {
            let hits = report.succeeded().iter().filter(|x| x == id).count()
                + report.failed().iter().filter(|x| x == id).count();
            assert_eq!(hits, 1, "{id} must be terminal exactly once");
            assert_eq!(seen.iter().filter(|(s, _)| s == id).count(), 1);
        }
        assert_eq!(report.succeeded(), ["ok", "flaky"]);
        assert_eq!(report.failed(), ["fail", "dead", "boom"]);

        // Sink order matches terminal order.
        let order: Vec<&str> = seen.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, ["ok", "fail", "flaky", "dead", "boom"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_between_attempts_only() {
        let runner = Runner::new(RunnerConfig::default().with_retry_bound(1));
        let tasks = vec![task("a", vec![Step::Retry, Step::Ok]), task("b", vec![Step::Ok])];

        let start = Instant::now();
        let (res, calls, _) = run_collect(&runner, tasks).await;
        let elapsed = start.elapsed();

        assert_eq!(calls.len(), 3);
        assert!(res.unwrap().is_clean());
        // three attempts → two pauses of the default 500ms
        assert!(elapsed >= Duration::from_millis(1000), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(1500), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_task_does_not_pause() {
        let runner = Runner::default();
        let start = Instant::now();
        let (res, _, _) = run_collect(&runner, vec![task("a", vec![Step::Ok])]).await;
        assert!(res.is_ok());
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_runner_is_reusable() {
        let runner = fast(1);
        let flaky = || vec![task("a", vec![Step::Retry, Step::Ok])];
        let (first, _, _) = run_collect(&runner, flaky()).await;
        let (second, calls, _) = run_collect(&runner, flaky()).await;

        assert_eq!(first.unwrap().succeeded(), ["a"]);
        // retry counters do not leak across runs
        assert_eq!(calls, ["a", "a"]);
        assert_eq!(second.unwrap().succeeded(), ["a"]);
    }
}
