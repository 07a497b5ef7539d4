//! # Runner configuration.
//!
//! Provides [`RunnerConfig`] settings for one [`Runner`](crate::Runner).
//!
//! ## Sentinel values
//! - `inter_task_delay = 0s` → no pause between attempts
//! - `retry_bound = 0` → single attempt per task

use std::time::Duration;

use crate::policies::JitterPolicy;

/// Default number of re-attempts per task after its first attempt.
pub const DEFAULT_RETRY_BOUND: u32 = 2;

/// Default pause between consecutive attempts.
pub const DEFAULT_INTER_TASK_DELAY: Duration = Duration::from_millis(500);

/// Configuration for the task runner.
///
/// ## Field semantics
/// - `retry_bound`: re-attempts allowed per task after the first (`0` = one attempt only)
/// - `inter_task_delay`: pause before every attempt except the first (`0s` = no pause)
/// - `jitter`: randomization applied to each pause
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use taskqueue::{JitterPolicy, RunnerConfig};
///
/// let cfg = RunnerConfig::default()
///     .with_retry_bound(5)
///     .with_inter_task_delay(Duration::from_millis(250))
///     .with_jitter(JitterPolicy::Equal);
///
/// assert_eq!(cfg.retry_bound, 5);
/// assert_eq!(RunnerConfig::default().with_inter_task_delay(Duration::ZERO).pause(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Maximum number of re-attempts per task after its first attempt.
    ///
    /// A task whose executor keeps asking for a retry is invoked
    /// `retry_bound + 1` times before being declared failed.
    pub retry_bound: u32,

    /// Pause between consecutive attempts.
    ///
    /// Applied before every attempt except the very first of a run,
    /// regardless of which task the attempt belongs to.
    pub inter_task_delay: Duration,

    /// Randomization applied to `inter_task_delay`.
    pub jitter: JitterPolicy,
}

impl RunnerConfig {
    /// Returns the pause to take before the next attempt, or `None` when pausing is disabled.
    ///
    /// Jitter is sampled on every call.
    #[inline]
    pub fn pause(&self) -> Option<Duration> {
        if self.inter_task_delay == Duration::ZERO {
            None
        } else {
            Some(self.jitter.apply(self.inter_task_delay))
        }
    }

    /// Returns a config with the given retry bound.
    pub fn with_retry_bound(mut self, retry_bound: u32) -> Self {
        self.retry_bound = retry_bound;
        self
    }

    /// Returns a config with the given inter-task delay.
    pub fn with_inter_task_delay(mut self, delay: Duration) -> Self {
        self.inter_task_delay = delay;
        self
    }

    /// Returns a config with the given jitter policy.
    pub fn with_jitter(mut self, jitter: JitterPolicy) -> Self {
        self.jitter = jitter;
        self
    }
}

impl Default for RunnerConfig {
    /// Default configuration:
    ///
    /// - `retry_bound = 2`
    /// - `inter_task_delay = 500ms`
    /// - `jitter = JitterPolicy::None`
    fn default() -> Self {
        Self {
            retry_bound: DEFAULT_RETRY_BOUND,
            inter_task_delay: DEFAULT_INTER_TASK_DELAY,
            jitter: JitterPolicy::None,
        }
    }
}
